use rand::Rng;

use super::super::{MazeMaker, Position};

pub trait Backtrack {
    fn backtrack(&mut self, root: Position);
}

impl<R: Rng + ?Sized> Backtrack for MazeMaker<'_, R> {
    fn backtrack(&mut self, root: Position) {
        self.visit_cell(root);
        let mut stack = vec![root];

        while let Some(curr) = stack.pop() {
            if let Some(next) = self.pick_neighbor(curr, true) {
                stack.push(curr);
                self.visit_cell(next);
                stack.push(next);
            }
        }
    }
}
