use crate::{
    bit_reader::BitReader,
    bit_writer::BitWrite,
    error::SerdeErr,
    serde::{ConstBitLength, Serde},
};

pub trait SerdeIntegerConversion<const SIGNED: bool, const VARIABLE: bool, const BITS: u8>:
    Sized
{
    fn try_from_integer(value: &SerdeInteger<SIGNED, VARIABLE, BITS>) -> Result<Self, SerdeErr>;
}

pub type UnsignedInteger<const BITS: u8> = SerdeInteger<false, false, BITS>;
pub type SignedInteger<const BITS: u8> = SerdeInteger<true, false, BITS>;
pub type UnsignedVariableInteger<const BITS: u8> = SerdeInteger<false, true, BITS>;
pub type SignedVariableInteger<const BITS: u8> = SerdeInteger<true, true, BITS>;

// The generic wrapper forwards to a non-generic inner type to keep monomorphized code small.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SerdeInteger<const SIGNED: bool, const VARIABLE: bool, const BITS: u8> {
    inner: SerdeIntegerInner,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
struct SerdeIntegerInner {
    value: i128,
    signed: bool,
    variable: bool,
    bits: u8,
}

impl SerdeIntegerInner {
    fn new(signed: bool, variable: bool, bits: u8, value: i128) -> Self {
        assert!(bits > 0, "can't create an integer with 0 bits...");
        assert!(
            bits < 127,
            "can't create an integer with more than 126 bits..."
        );
        assert!(
            signed || value >= 0,
            "can't encode a negative number with an Unsigned Integer!"
        );

        if !variable {
            let limit: u128 = 1 << bits;
            assert!(
                value.unsigned_abs() < limit,
                "with {} bits, can't encode a magnitude of {} or more",
                bits,
                limit
            );
        }

        Self {
            value,
            signed,
            variable,
            bits,
        }
    }

    fn ser(&self, writer: &mut dyn BitWrite) {
        if self.signed {
            writer.write_bit(self.value < 0);
        }

        let mut magnitude = self.value.unsigned_abs();
        loop {
            let proceed = self.variable && magnitude >= (1 << self.bits);
            if self.variable {
                writer.write_bit(proceed);
            }
            for _ in 0..self.bits {
                writer.write_bit(magnitude & 1 != 0);
                magnitude >>= 1;
            }
            if !proceed {
                return;
            }
        }
    }

    fn de(reader: &mut BitReader, signed: bool, variable: bool, bits: u8) -> Result<Self, SerdeErr> {
        let negative = signed && reader.read_bit()?;

        let mut magnitude: u128 = 0;
        let mut shift: u32 = 0;
        loop {
            let proceed = variable && reader.read_bit()?;
            for _ in 0..bits {
                if shift >= 127 {
                    return Err(SerdeErr::OutOfRange {
                        value: magnitude as i128,
                        type_name: "SerdeInteger",
                    });
                }
                if reader.read_bit()? {
                    magnitude |= 1 << shift;
                }
                shift += 1;
            }
            if !proceed {
                break;
            }
        }

        let value = magnitude as i128;
        Ok(Self {
            value: if negative { -value } else { value },
            signed,
            variable,
            bits,
        })
    }

    fn bit_length(&self) -> u32 {
        let mut output: u32 = 0;

        if self.signed {
            output += 1;
        }

        if self.variable {
            let mut magnitude = self.value.unsigned_abs();
            loop {
                let proceed = magnitude >= (1 << self.bits);
                output += 1 + self.bits as u32;
                magnitude >>= self.bits;
                if !proceed {
                    break;
                }
            }
        } else {
            output += self.bits as u32;
        }
        output
    }
}

impl<const SIGNED: bool, const VARIABLE: bool, const BITS: u8> SerdeInteger<SIGNED, VARIABLE, BITS> {
    pub fn new<T: Into<i128>>(value: T) -> Self {
        Self {
            inner: SerdeIntegerInner::new(SIGNED, VARIABLE, BITS, value.into()),
        }
    }

    pub fn get(&self) -> i128 {
        self.inner.value
    }

    /// Converts into a primitive, failing if the value doesn't fit
    pub fn try_to<T: SerdeIntegerConversion<SIGNED, VARIABLE, BITS>>(&self) -> Result<T, SerdeErr> {
        T::try_from_integer(self)
    }

    /// Converts into a primitive
    ///
    /// # Panics
    ///
    /// Panics if the value is out of range for `T`.
    pub fn to<T: SerdeIntegerConversion<SIGNED, VARIABLE, BITS>>(&self) -> T {
        self.try_to()
            .expect("SerdeInteger's value is out of range to convert to this type.")
    }
}

impl<const SIGNED: bool, const VARIABLE: bool, const BITS: u8> Serde
    for SerdeInteger<SIGNED, VARIABLE, BITS>
{
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.inner.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let inner = SerdeIntegerInner::de(reader, SIGNED, VARIABLE, BITS)?;
        Ok(Self { inner })
    }

    fn bit_length(&self) -> u32 {
        self.inner.bit_length()
    }
}

impl<const SIGNED: bool, const BITS: u8> ConstBitLength for SerdeInteger<SIGNED, false, BITS> {
    fn const_bit_length() -> u32 {
        let sign_bit = if SIGNED { 1 } else { 0 };
        sign_bit + BITS as u32
    }
}

impl<const SIGNED: bool, const VARIABLE: bool, const BITS: u8, T: TryFrom<i128>>
    SerdeIntegerConversion<SIGNED, VARIABLE, BITS> for T
{
    fn try_from_integer(value: &SerdeInteger<SIGNED, VARIABLE, BITS>) -> Result<Self, SerdeErr> {
        T::try_from(value.get()).map_err(|_| SerdeErr::OutOfRange {
            value: value.get(),
            type_name: std::any::type_name::<T>(),
        })
    }
}
