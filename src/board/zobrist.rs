use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::cell::Cell;
use super::player::Player;

// Zobrist board hashing
// * One number for each mark at each cell ( 2 * size^2 )
//
// The hash of a position is the xor of the numbers for every occupied cell.
// Empty cells contribute nothing, so two boards with identical contents
// always hash identically, regardless of the order the marks were placed in.
//
// The key table is generated from a fixed seed: the hash is a pure function
// of the cell contents, stable across boards and across processes.

const ZOBRIST_SEED: u64 = 0x7EC0_11EC_7AB1_E5;

#[derive(Clone)]
pub struct Zobrist {
    numbers: Vec<u64>,
}

impl Zobrist {
    pub fn new(size: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let numbers = (0..size * size * 2).map(|_| rng.gen()).collect();
        Self { numbers }
    }

    // nums are laid out cell-major: the two marks for cell 0, then cell 1, ...
    pub fn key(&self, cell_index: usize, player: Player) -> u64 {
        self.numbers[cell_index * 2 + player as usize]
    }

    /// Hashes a full cell slice from scratch. `Board::set` maintains the
    /// same value incrementally; this is the reference computation.
    pub fn hash(&self, cells: &[Cell]) -> u64 {
        let mut hash = 0;
        for (index, cell) in cells.iter().enumerate() {
            if let Some(player) = cell.player() {
                hash ^= self.key(index, player);
            }
        }
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_nums_random() {
        let zob = Zobrist::new(5);
        let mut set = HashSet::new();

        for (i, num) in zob.numbers.iter().enumerate() {
            assert!(
                !set.contains(num),
                "zobrist number {} ({}) is in the set",
                i,
                num
            );
            set.insert(num);
        }
    }

    #[test]
    fn test_tables_are_reproducible() {
        let zob1 = Zobrist::new(4);
        let zob2 = Zobrist::new(4);
        assert_eq!(zob1.numbers, zob2.numbers);
    }

    #[test]
    fn test_hash_is_sensitive_to_every_cell() {
        let zob = Zobrist::new(3);
        let empty = vec![Cell::Empty; 9];
        assert_eq!(0, zob.hash(&empty));

        for index in 0..9 {
            for &mark in &[Cell::X, Cell::O] {
                let mut cells = empty.clone();
                cells[index] = mark;
                assert_ne!(0, zob.hash(&cells), "cell {} mark {}", index, mark);
            }
        }

        let mut x_cells = empty.clone();
        x_cells[4] = Cell::X;
        let mut o_cells = empty;
        o_cells[4] = Cell::O;
        assert_ne!(zob.hash(&x_cells), zob.hash(&o_cells));
    }
}
