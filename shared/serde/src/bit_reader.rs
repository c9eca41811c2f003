use crate::error::SerdeErr;

/// Reads bits back out of a buffer produced by a `BitWriter`
pub struct BitReader<'b> {
    buffer: &'b [u8],
    bit_index: usize,
}

impl<'b> BitReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            buffer,
            bit_index: 0,
        }
    }

    pub fn bits_read(&self) -> usize {
        self.bit_index
    }

    pub fn bits_remaining(&self) -> usize {
        self.buffer.len() * 8 - self.bit_index
    }

    fn ensure(&self, bits: usize) -> Result<(), SerdeErr> {
        let remaining = self.bits_remaining();
        if remaining < bits {
            return Err(SerdeErr::UnexpectedEnd {
                bits_needed: bits as u32,
                bits_remaining: remaining as u32,
            });
        }
        Ok(())
    }

    pub fn read_bit(&mut self) -> Result<bool, SerdeErr> {
        self.ensure(1)?;

        let byte = self.buffer[self.bit_index / 8];
        let bit = (byte >> (self.bit_index % 8)) & 1 != 0;
        self.bit_index += 1;

        Ok(bit)
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        self.ensure(8)?;

        let mut output: u8 = 0;
        for index in 0..8 {
            if self.read_bit()? {
                output |= 1 << index;
            }
        }
        Ok(output)
    }

    /// Reads `N` whole bytes, failing without consuming anything if the buffer is too short
    pub fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N], SerdeErr> {
        self.ensure(N * 8)?;

        let mut output = [0u8; N];
        for byte in output.iter_mut() {
            *byte = self.read_byte()?;
        }
        Ok(output)
    }
}
