use crate::endian::{machine_byte_order, ByteOrder};
use anyhow::{anyhow, Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum WireFamily {
    Binary,
    Text,
}

/// Whether values carry their canonical type name on the wire.
///
/// `Conditional` is what nested values see under an `Included` parent.
/// Every shape treats it as `Excluded`, except a tagged union, which still tags
/// its active alternative because the union's own type does not determine it.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum TypeTagPolicy {
    Excluded,
    Conditional,
    Included,
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct EncodingMode {
    wire_family: WireFamily,
    byte_order: ByteOrder,
    type_tag_policy: TypeTagPolicy,
}

pub const BINARY_BIG: EncodingMode = EncodingMode::binary(ByteOrder::Big);
pub const BINARY_LITTLE: EncodingMode = EncodingMode::binary(ByteOrder::Little);
pub const BINARY_NATIVE: EncodingMode = EncodingMode::binary(machine_byte_order());
pub const BINARY_BIG_TAGGED: EncodingMode = BINARY_BIG.with_type_tag_policy(TypeTagPolicy::Included);
pub const BINARY_LITTLE_TAGGED: EncodingMode =
    BINARY_LITTLE.with_type_tag_policy(TypeTagPolicy::Included);
pub const BINARY_NATIVE_TAGGED: EncodingMode =
    BINARY_NATIVE.with_type_tag_policy(TypeTagPolicy::Included);
/// Human-readable text. A.k.a. "plain".
pub const TEXT: EncodingMode = EncodingMode::text();
/// Human-readable text prefixed by type names. A.k.a. "literal".
pub const TEXT_TAGGED: EncodingMode = TEXT.with_type_tag_policy(TypeTagPolicy::Included);

impl EncodingMode {
    pub const ALL_STANDARD: [EncodingMode; 8] = [
        BINARY_BIG,
        BINARY_LITTLE,
        BINARY_NATIVE,
        BINARY_BIG_TAGGED,
        BINARY_LITTLE_TAGGED,
        BINARY_NATIVE_TAGGED,
        TEXT,
        TEXT_TAGGED,
    ];

    pub const fn binary(byte_order: ByteOrder) -> Self {
        Self {
            wire_family: WireFamily::Binary,
            byte_order,
            type_tag_policy: TypeTagPolicy::Excluded,
        }
    }

    /// The byte order of a text mode is never consulted.
    pub const fn text() -> Self {
        Self {
            wire_family: WireFamily::Text,
            byte_order: machine_byte_order(),
            type_tag_policy: TypeTagPolicy::Excluded,
        }
    }

    pub const fn with_type_tag_policy(self, type_tag_policy: TypeTagPolicy) -> Self {
        Self {
            type_tag_policy,
            ..self
        }
    }

    /// The mode for values nested one level below a value encoded under `self`.
    pub const fn demoted(self) -> Self {
        match self.type_tag_policy {
            TypeTagPolicy::Included => self.with_type_tag_policy(TypeTagPolicy::Conditional),
            TypeTagPolicy::Conditional | TypeTagPolicy::Excluded => self,
        }
    }

    pub const fn wire_family(&self) -> WireFamily {
        self.wire_family
    }
    pub const fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }
    pub const fn type_tag_policy(&self) -> TypeTagPolicy {
        self.type_tag_policy
    }

    pub fn includes_type_tag(&self) -> bool {
        self.type_tag_policy == TypeTagPolicy::Included
    }
    /// True for `Included` and `Conditional`.
    pub fn requests_type_tags(&self) -> bool {
        self.type_tag_policy != TypeTagPolicy::Excluded
    }
}

impl Default for EncodingMode {
    fn default() -> Self {
        BINARY_NATIVE
    }
}

/* Textual selection of a mode, e.g. `binary-le+tags`. */

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.wire_family, self.byte_order) {
            (WireFamily::Text, _) => write!(f, "text")?,
            (WireFamily::Binary, ByteOrder::Big) => write!(f, "binary-be")?,
            (WireFamily::Binary, ByteOrder::Little) => write!(f, "binary-le")?,
        }
        match self.type_tag_policy {
            TypeTagPolicy::Excluded => Ok(()),
            TypeTagPolicy::Conditional => write!(f, "+conditional"),
            TypeTagPolicy::Included => write!(f, "+tags"),
        }
    }
}

impl FromStr for EncodingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (family, policy) = match s.split_once('+') {
            None => (s, TypeTagPolicy::Excluded),
            Some((family, "tags")) => (family, TypeTagPolicy::Included),
            Some((family, "conditional")) => (family, TypeTagPolicy::Conditional),
            Some((_, etc)) => return Err(anyhow!("Unknown type tag policy {etc:?} in {s:?}")),
        };
        let mode = match family {
            "binary-be" => BINARY_BIG,
            "binary-le" => BINARY_LITTLE,
            "binary-native" => BINARY_NATIVE,
            "text" => TEXT,
            etc => return Err(anyhow!("Unknown wire family {etc:?} in {s:?}")),
        };
        Ok(mode.with_type_tag_policy(policy))
    }
}
