use crate::{bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr};

/// A type that can be written to and read back from a bit stream
pub trait Serde: Sized {
    /// Appends the value to the stream
    fn ser(&self, writer: &mut dyn BitWrite);

    /// Reads a value from the stream, advancing it past the value
    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr>;
}
