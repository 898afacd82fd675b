use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use log::{debug, error};

/// Where a [`Car`] reports its lifecycle. Shared with the scope that owns
/// the car so both write to the same stream in program order.
pub type Console<W> = Rc<RefCell<W>>;

/// A resource with no state of its own. Creation and destruction are only
/// observable through the lines it writes to its console.
pub struct Car<W: Write> {
    console: Console<W>,
}

impl<W: Write> Car<W> {
    pub fn new(console: Console<W>) -> io::Result<Self> {
        writeln!(console.borrow_mut(), "Car created")?;
        debug!("car constructed");
        Ok(Self { console })
    }

    pub fn drive(&self) -> io::Result<()> {
        writeln!(self.console.borrow_mut(), "Driving...")
    }
}

impl<W: Write> Drop for Car<W> {
    fn drop(&mut self) {
        // Last word from the `Car`; a failed write here is logged.
        if let Err(e) = writeln!(self.console.borrow_mut(), "Car destroyed") {
            error!("failed to report car destruction: {e}");
        }
        debug!("car destroyed");
    }
}
