//! Raw binary reading and writing of packed angles
//!
//! An angle is serialized as its 8-byte word in native byte order, with no
//! header, version or validation.

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use super::PackedAngle;
use crate::Result;

impl PackedAngle {
    /// Size of a serialized angle in bytes
    pub const fn size_bytes() -> usize {
        8
    }

    /// Write the packed word in binary format
    #[inline]
    pub fn write_binary<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u64::<NativeEndian>(self.to_bits())
    }

    /// Read a packed word from binary format
    #[inline]
    pub fn read_binary<R: Read>(reader: &mut R) -> io::Result<Self> {
        let bits = reader.read_u64::<NativeEndian>()?;
        Ok(PackedAngle::from_bits(bits))
    }

    /// The packed word as native-order bytes
    pub fn to_ne_bytes(self) -> [u8; 8] {
        self.to_bits().to_ne_bytes()
    }

    /// Rebuild an angle from native-order bytes
    pub fn from_ne_bytes(bytes: [u8; 8]) -> Self {
        PackedAngle::from_bits(u64::from_ne_bytes(bytes))
    }

    /// Save the angle to a file holding exactly its 8-byte word
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        self.write_binary(&mut writer)?;
        writer.flush()?;

        Ok(())
    }

    /// Load an angle from the first 8 bytes of a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        Ok(PackedAngle::read_binary(&mut reader)?)
    }
}
