use crate::domain::validation::ValidationError;

fn non_empty_trimmed(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// CloudControl account user name used for HTTP Basic authentication.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty_trimmed(value.into(), Self::FIELD).map(Self)
    }

    /// Borrow the validated user name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// CloudControl account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        ///
        /// Invariant: non-empty after trimming.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Wire field name the identifier binds to (`", $field, "`).")]
            pub const FIELD: &'static str = $field;

            #[doc = concat!("Create a validated [`", stringify!($name), "`].")]
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                non_empty_trimmed(value.into(), Self::FIELD).map(Self)
            }

            /// Borrow the validated identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

identifier!(
    /// Organization id; every resource path lives under it.
    OrgId,
    "orgId"
);
identifier!(
    /// Data center location id, e.g. `NA9`.
    DatacenterId,
    "datacenterId"
);
identifier!(
    /// Network domain id; also the filter parameter of the network listings.
    NetworkDomainId,
    "networkDomainId"
);
identifier!(
    /// VLAN id.
    VlanId,
    "id"
);
identifier!(
    /// Public IPv4 address block id.
    PublicIpBlockId,
    "id"
);
identifier!(
    /// NAT rule id.
    NatRuleId,
    "id"
);
identifier!(
    /// Server id.
    ServerId,
    "id"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// One-based page number (`pageNumber`).
pub struct PageNumber(u32);

impl PageNumber {
    /// Query parameter name (`pageNumber`).
    pub const FIELD: &'static str = "pageNumber";
    pub const FIRST: Self = Self(1);

    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: 1,
                max: u32::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The page after this one, saturating at `u32::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Maximum number of items per page (`pageSize`).
///
/// Invariant: within `1..=250`.
pub struct PageSize(u32);

impl PageSize {
    /// Query parameter name (`pageSize`).
    pub const FIELD: &'static str = "pageSize";
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 250;

    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Opaque continuation token handed out by the server (`pageToken`).
///
/// Invariant: non-empty after trimming.
pub struct PageToken(String);

impl PageToken {
    /// Query parameter name (`pageToken`).
    pub const FIELD: &'static str = "pageToken";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty_trimmed(value.into(), Self::FIELD).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
