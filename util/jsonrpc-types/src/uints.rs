use crate::{hex, prelude::Serialize, ScalarError};
use ckb_txcodec_error::Error;
use serde::{Deserialize, Deserializer};
use std::{fmt, hash, marker, num};

/// An unsigned integer width which has a textual hex form.
pub trait Uint: Copy + fmt::LowerHex {
    /// The type name used in error messages.
    const NAME: &'static str;

    /// Parses hex digits, see `u32::from_str_radix`.
    fn from_str_radix(src: &str, radix: u32) -> Result<Self, num::ParseIntError>;

    /// The little-endian bytes.
    fn to_le_vec(self) -> Vec<u8>;
}

/// An unsigned integer kept as the 0x-prefixed hex string it was given as.
///
/// Leading zeros and uppercase digits are accepted. An odd number of digits is padded with one
/// leading `0` before parsing.
pub struct JsonUint<T: Uint> {
    text: String,
    _width: marker::PhantomData<T>,
}

impl<T: Uint> JsonUint<T> {
    /// Wraps a textual number without checking it.
    pub fn new<S: Into<String>>(text: S) -> Self {
        JsonUint {
            text: text.into(),
            _width: marker::PhantomData,
        }
    }

    /// The number text as given.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Parses the text into the integer.
    pub fn value(&self) -> Result<T, ScalarError> {
        let digits = hex::strip_prefix(T::NAME, &self.text)?;
        hex::check_digits(T::NAME, &self.text, digits)?;
        if digits.is_empty() {
            return Err(ScalarError::EmptyNumber {
                name: T::NAME,
                value: self.text.clone(),
            });
        }
        let padded;
        let digits = if digits.len() & 1 != 0 {
            padded = format!("0{}", digits);
            padded.as_str()
        } else {
            digits
        };
        // digits were checked, so overflow is the only remaining parse failure
        T::from_str_radix(digits, 16).map_err(|_| ScalarError::Overflow {
            name: T::NAME,
            value: self.text.clone(),
        })
    }
}

impl<T: Uint> Serialize for JsonUint<T> {
    fn serialize(&self) -> Result<Vec<u8>, Error> {
        Ok(self.value()?.to_le_vec())
    }
}

impl<T: Uint> Clone for JsonUint<T> {
    fn clone(&self) -> Self {
        JsonUint::new(self.text.clone())
    }
}

impl<T: Uint> Default for JsonUint<T> {
    fn default() -> Self {
        JsonUint::new("0x0")
    }
}

impl<T: Uint> PartialEq for JsonUint<T> {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl<T: Uint> Eq for JsonUint<T> {}

impl<T: Uint> hash::Hash for JsonUint<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state)
    }
}

impl<T: Uint> fmt::Debug for JsonUint<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({:?})", T::NAME, self.text)
    }
}

impl<T: Uint> fmt::Display for JsonUint<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl<T: Uint> From<T> for JsonUint<T> {
    fn from(value: T) -> Self {
        JsonUint::new(format!("0x{:x}", value))
    }
}

impl<T: Uint> From<&str> for JsonUint<T> {
    fn from(text: &str) -> Self {
        JsonUint::new(text)
    }
}

impl<'de, T: Uint> Deserialize<'de> for JsonUint<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(JsonUint::new)
    }
}

macro_rules! def_json_uint {
    ($alias:ident, $inner:ident, $bits:expr) => {
        #[doc = "The "]
        #[doc = $bits]
        #[doc = r#" unsigned integer type encoded as the 0x-prefixed hex string.

## Examples

| Text      | Decimal Value                  |
| --------- | ------------------------------ |
| "0x0"     | 0                              |
| "0x10"    | 16                             |
| "0x010"   | 16, leading zeros are accepted |
| "0xA"     | 10                             |
| "10"      | Invalid, 0x is required        |"#]
        pub type $alias = JsonUint<$inner>;

        impl Uint for $inner {
            const NAME: &'static str = stringify!($alias);

            fn from_str_radix(src: &str, radix: u32) -> Result<Self, num::ParseIntError> {
                $inner::from_str_radix(src, radix)
            }

            fn to_le_vec(self) -> Vec<u8> {
                self.to_le_bytes().to_vec()
            }
        }
    };
}

def_json_uint!(Uint32, u32, "32-bit");
def_json_uint!(Uint64, u64, "64-bit");
