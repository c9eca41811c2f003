use crate::{
    bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr, integer::UnsignedVariableInteger,
    serde::Serde,
};

// Bool

impl Serde for bool {
    fn ser(&self, writer: &mut dyn BitWrite) {
        writer.write_bit(*self);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        reader.read_bit()
    }
}

// Numbers are written byte by byte, least significant byte first

macro_rules! impl_serde_for_number {
    ($($type:ty),*) => {
        $(
            impl Serde for $type {
                fn ser(&self, writer: &mut dyn BitWrite) {
                    for byte in self.to_le_bytes() {
                        writer.write_byte(byte);
                    }
                }

                fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
                    let bytes = reader.read_bytes::<{ std::mem::size_of::<$type>() }>()?;
                    Ok(<$type>::from_le_bytes(bytes))
                }
            }
        )*
    };
}

impl_serde_for_number!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

// String

impl Serde for String {
    fn ser(&self, writer: &mut dyn BitWrite) {
        let length = UnsignedVariableInteger::<7>::new(self.len() as u64);
        length.ser(writer);
        for byte in self.as_bytes() {
            writer.write_byte(*byte);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let length: usize = UnsignedVariableInteger::<7>::de(reader)?.to()?;

        // never allocate more than the buffer could possibly hold
        let bits_remaining = reader.bits_remaining();
        if length.saturating_mul(8) > bits_remaining {
            return Err(SerdeErr::UnexpectedEnd {
                bits_needed: length.saturating_mul(8).min(u32::MAX as usize) as u32,
                bits_remaining: bits_remaining as u32,
            });
        }

        let mut bytes = Vec::with_capacity(length);
        for _ in 0..length {
            bytes.push(reader.read_byte()?);
        }

        String::from_utf8(bytes).map_err(|_| SerdeErr::InvalidUtf8 {
            byte_length: length,
        })
    }
}
