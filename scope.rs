use std::io::{self, Write};
use std::rc::Rc;

use log::debug;

use crate::car::{Car, Console};
use crate::pointers;

/// Whether ownership of the car moves to a second handle before the
/// null check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transfer {
    #[default]
    Keep,
    Move,
}

/// The whole program body. Every line goes to `console`, including the one
/// written when the car is dropped on the way out of this function.
pub fn run<W: Write>(console: Console<W>, transfer: Transfer) -> io::Result<()> {
    // `run` owns the only handle to the `Car`. `Option` stands in for a
    // handle that may be empty.
    let mut car: Option<Box<Car<W>>> = Some(Box::new(Car::new(Rc::clone(&console))?));

    if let Some(car) = &car {
        car.drive()?;
    }

    // Ownership transfer: `take` moves the `Box` into `new_owner` and leaves
    // `None` behind, so `car` is empty from here on. `new_owner` now decides
    // when the `Car` is dropped.
    let new_owner = match transfer {
        Transfer::Move => car.take(),
        Transfer::Keep => None,
    };
    debug!("new owner holds car: {}", new_owner.is_some());

    if car.is_none() {
        writeln!(console.borrow_mut(), "car is null after move")?;
    }

    let seen = pointers::declare(5, 10);
    debug!("{seen:?}");

    // Whichever handle still holds the `Car` drops it here, exactly once.
    Ok(())
}
