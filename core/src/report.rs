//! Line formatting shared by both listers.
//!
//! A report is a sequence of outer entities, each one a header line followed by its
//! inner entities:
//!
//! ```text
//! [ static ]
//!  => style.css
//! ```

use std::io::{self, Write};

pub fn write_header<W: Write + ?Sized>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(out, "[ {} ]", name)
}

pub fn write_entry<W: Write + ?Sized>(out: &mut W, id: &str) -> io::Result<()> {
    writeln!(out, " => {}", id)
}
