extern crate log;
use crate::catalog;
use crate::checksum::Checksum;
use crate::reflect::{reflect_bits, reflect_byte, width_mask, MAX_WIDTH};
use crate::Error;
use log::{debug, trace, warn};
use std::convert::TryFrom;
use std::fmt;

/// Standard check input, the ASCII string "123456789".
pub const CHECK_DATA: &[u8] = b"123456789";

/// Parameters of one CRC algorithm.
///
/// All register sized values are kept modulo `2^width`; the top bit of the
/// generator polynomial is implicit and not stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CrcParameters {
    /// Human readable name, also used as log target.
    pub name: &'static str,
    /// Number of bits in the register, `1..=128`.
    pub width: u32,
    /// Generator polynomial without its top bit.
    pub polynomial: u128,
    /// Register value before any input is processed.
    pub init_value: u128,
    /// Reflect every input byte before it enters the register.
    pub reflect_input: bool,
    /// Reflect the whole register before the output XOR.
    pub reflect_output: bool,
    /// Value XORed into the register to produce the digest.
    pub xor_output: u128,
    /// Expected digest of [`CHECK_DATA`].
    pub check_result: u128,
}

impl CrcParameters {
    /// Starts a user defined parameter set: zero init, no reflection, zero
    /// output XOR.
    pub const fn new(width: u32, polynomial: u128) -> Self {
        CrcParameters {
            name: "CRC",
            width,
            polynomial,
            init_value: 0,
            reflect_input: false,
            reflect_output: false,
            xor_output: 0,
            check_result: 0,
        }
    }

    pub const fn name(self, name: &'static str) -> Self {
        CrcParameters { name, ..self }
    }

    pub const fn init(self, init_value: u128) -> Self {
        CrcParameters { init_value, ..self }
    }

    pub const fn reflect_input(self, reflect_input: bool) -> Self {
        CrcParameters { reflect_input, ..self }
    }

    pub const fn reflect_output(self, reflect_output: bool) -> Self {
        CrcParameters { reflect_output, ..self }
    }

    /// Sets both reflection flags at once.
    pub const fn reflect(self, reflect: bool) -> Self {
        CrcParameters {
            reflect_input: reflect,
            reflect_output: reflect,
            ..self
        }
    }

    pub const fn xor_output(self, xor_output: u128) -> Self {
        CrcParameters { xor_output, ..self }
    }

    pub const fn check(self, check_result: u128) -> Self {
        CrcParameters { check_result, ..self }
    }

    /// Number of bytes needed to hold a digest.
    pub fn byte_width(&self) -> usize {
        ((self.width + 7) / 8) as usize
    }

    /// Checks the width and that every register sized value fits in it.
    /// Values are never truncated silently.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(Error::InvalidWidth(self.width));
        }
        let mask = width_mask(self.width);
        let fields = [
            ("polynomial", self.polynomial),
            ("init_value", self.init_value),
            ("xor_output", self.xor_output),
            ("check_result", self.check_result),
        ];
        for &(field, value) in fields.iter() {
            if value & !mask != 0 {
                return Err(Error::ValueOutOfRange {
                    field,
                    value,
                    width: self.width,
                });
            }
        }
        Ok(())
    }

    /// One-shot digest of `data`.
    pub fn checksum(&self, data: &[u8]) -> Result<u128, Error> {
        Ok(CrcEngine::new(*self)?.process(data).finalize())
    }
}

/// Inner loop used by an engine.
///
/// The native strategies give bit-identical results to `Generic` for their
/// width, they only avoid the wide register and the sub-byte widening.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Any width in `1..=128`.
    Generic,
    Native8,
    Native16,
    Native32,
}

impl Strategy {
    /// The fastest strategy serving `width`.
    pub fn for_width(width: u32) -> Self {
        match width {
            8 => Strategy::Native8,
            16 => Strategy::Native16,
            32 => Strategy::Native32,
            _ => Strategy::Generic,
        }
    }

    pub fn serves(self, width: u32) -> bool {
        match self {
            Strategy::Generic => true,
            Strategy::Native8 => width == 8,
            Strategy::Native16 => width == 16,
            Strategy::Native32 => width == 32,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Generic => "generic",
            Strategy::Native8 => "native-8",
            Strategy::Native16 => "native-16",
            Strategy::Native32 => "native-32",
        };
        f.write_str(name)
    }
}

/// Byte order of [`CrcEngine::finalize_bytes`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

macro_rules! native_absorb {
    ($name:ident, $ty:ty) => {
        fn $name(&mut self, data: &[u8]) {
            const WIDTH: u32 = <$ty>::BITS;
            const TOP_BIT: $ty = 1 << (WIDTH - 1);
            let poly = self.params.polynomial as $ty;
            let reflect = self.params.reflect_input;
            let mut crc = self.register as $ty;
            for &byte in data {
                let byte = if reflect { reflect_byte(byte) } else { byte };
                crc ^= (byte as $ty) << (WIDTH - 8);
                for _ in 0..8 {
                    crc = if crc & TOP_BIT != 0 {
                        (crc << 1) ^ poly
                    } else {
                        crc << 1
                    };
                }
            }
            self.register = crc as u128;
        }
    };
}

/// Streaming CRC calculator.
///
/// Owns one parameter set and the running register. `finalize` only reads the
/// register, so a digest can be taken mid-stream and processing resumed.
#[derive(Clone, Debug)]
pub struct CrcEngine {
    params: CrcParameters,
    strategy: Strategy,
    /// Running register, always `< 2^width`
    register: u128,
}

impl CrcEngine {
    native_absorb!(absorb_native8, u8);
    native_absorb!(absorb_native16, u16);
    native_absorb!(absorb_native32, u32);

    /// Shift-xor over any width. Registers narrower than a byte are moved to
    /// the top of an 8 bit window for the loop and moved back afterwards.
    fn absorb_generic(&mut self, data: &[u8]) {
        let width = self.params.width;
        let widen = 8u32.saturating_sub(width);
        let mut crc = self.register << widen;
        let poly = self.params.polynomial << widen;
        let mut top_bit = 1u128 << (width - 1);
        let mut mask = width_mask(width);
        let shift = width.saturating_sub(8);
        if widen > 0 {
            top_bit = 0x80;
            mask = 0xFF;
        }

        let reflect = self.params.reflect_input;
        for &byte in data {
            let byte = if reflect { reflect_byte(byte) } else { byte };
            crc ^= (byte as u128) << shift;
            for _ in 0..8 {
                if crc & top_bit != 0 {
                    crc = (crc << 1) ^ poly;
                } else {
                    crc <<= 1;
                }
                crc &= mask;
            }
        }
        self.register = crc >> widen;
    }

    fn absorb(&mut self, data: &[u8]) {
        match self.strategy {
            Strategy::Generic => self.absorb_generic(data),
            Strategy::Native8 => self.absorb_native8(data),
            Strategy::Native16 => self.absorb_native16(data),
            Strategy::Native32 => self.absorb_native32(data),
        }
    }
}

impl CrcEngine {
    /// Construct an engine with the fastest strategy for the width.
    /// The register starts at `params.init_value`.
    pub fn new(params: CrcParameters) -> Result<Self, Error> {
        Self::with_strategy(params, Strategy::for_width(params.width))
    }

    /// Construct an engine with an explicit inner loop. Fails if a native
    /// strategy is requested for a width it does not serve.
    pub fn with_strategy(params: CrcParameters, strategy: Strategy) -> Result<Self, Error> {
        params.validate()?;
        if !strategy.serves(params.width) {
            return Err(Error::StrategyMismatch {
                strategy,
                width: params.width,
            });
        }
        debug!(target: params.name,
            "new engine: width={}, poly=0x{:X}, init=0x{:X}, refin={}, refout={}, xorout=0x{:X}, strategy={}",
            params.width, params.polynomial, params.init_value, params.reflect_input,
            params.reflect_output, params.xor_output, strategy
        );
        Ok(CrcEngine {
            params,
            strategy,
            register: params.init_value,
        })
    }

    /// Construct an engine for a named catalog entry.
    pub fn by_name(name: &str) -> Result<Self, Error> {
        Self::new(*catalog::find(name)?)
    }

    pub fn parameters(&self) -> &CrcParameters {
        &self.params
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Raw register, before output reflection and XOR.
    pub fn value(&self) -> u128 {
        self.register
    }

    /// Restores the register to the initial value.
    pub fn reset(&mut self) -> &mut Self {
        debug!(target: self.params.name, "reset register to 0x{:X}", self.params.init_value);
        self.register = self.params.init_value;
        self
    }

    /// Loads an arbitrary register value, e.g. to continue a CRC computed
    /// elsewhere.
    pub fn reset_to(&mut self, value: u128) -> Result<&mut Self, Error> {
        if value & !width_mask(self.params.width) != 0 {
            return Err(Error::ValueOutOfRange {
                field: "register",
                value,
                width: self.params.width,
            });
        }
        debug!(target: self.params.name, "reset register to 0x{:X}", value);
        self.register = value;
        Ok(self)
    }

    /// Absorbs `data`. Splitting the input across calls gives the same result
    /// as a single call on the concatenation.
    pub fn process(&mut self, data: &[u8]) -> &mut Self {
        trace!(target: self.params.name, "process {} bytes", data.len());
        self.absorb(data);
        self
    }

    /// Absorbs a sequence of integers, each of which must be a byte value.
    ///
    /// On error the elements before `index` have already been absorbed; reset
    /// or discard the engine.
    pub fn try_process_values<I>(&mut self, values: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<i128>,
    {
        for (index, value) in values.into_iter().enumerate() {
            let value: i128 = value.into();
            let byte = u8::try_from(value).map_err(|_| Error::ByteOutOfRange { index, value })?;
            self.absorb(&[byte]);
        }
        Ok(self)
    }

    /// Digest of everything absorbed so far. Does not modify the register.
    pub fn finalize(&self) -> u128 {
        let mut crc = self.register;
        if self.params.reflect_output {
            crc = reflect_bits(self.params.width, crc);
        }
        (crc ^ self.params.xor_output) & width_mask(self.params.width)
    }

    /// Digest as `byte_width` bytes.
    pub fn finalize_bytes(&self, order: ByteOrder) -> Vec<u8> {
        let crc = self.finalize();
        let n = self.params.byte_width();
        let byte_at = |i: usize| (crc >> (8 * i)) as u8;
        match order {
            ByteOrder::BigEndian => (0..n).rev().map(byte_at).collect(),
            ByteOrder::LittleEndian => (0..n).map(byte_at).collect(),
        }
    }

    /// Digest as upper-case hex, two digits per digest byte.
    pub fn finalize_hex(&self) -> String {
        format!("{:0w$X}", self.finalize(), w = 2 * self.params.byte_width())
    }

    /// Runs the check vector through a fresh engine with the same parameters
    /// and strategy. The running register is not touched.
    pub fn self_test(&self) -> Result<(), Error> {
        let actual = CrcEngine::with_strategy(self.params, self.strategy)?
            .process(CHECK_DATA)
            .finalize();
        if actual != self.params.check_result {
            warn!(target: self.params.name, "check mismatch: expected=0x{:X}, actual=0x{:X}",
                self.params.check_result, actual);
            return Err(Error::CheckMismatch {
                name: self.params.name,
                expected: self.params.check_result,
                actual,
            });
        }
        Ok(())
    }
}

impl Checksum for CrcEngine {
    type Output = u128;

    fn process(&mut self, data: &[u8]) -> &mut Self {
        CrcEngine::process(self, data)
    }

    fn finalize(&self) -> u128 {
        CrcEngine::finalize(self)
    }

    fn reset(&mut self) -> &mut Self {
        CrcEngine::reset(self)
    }
}
