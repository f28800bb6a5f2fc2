// Torn API error codes
//
// The error envelope carries a numeric code. The table is closed: a code
// outside it converts to `Error::UnmappedErrorCode` instead of a default
// message, so a new upstream code shows up as a failure here.

use std::fmt;

use crate::error::Error;

/// Every error code the Torn API is known to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    Unknown,
    KeyEmpty,
    IncorrectKey,
    WrongType,
    WrongFields,
    TooManyRequests,
    IncorrectId,
    IncorrectIdEntityRelation,
    IpBlock,
    ApiDisabled,
    KeyOwnerInFederalJail,
    KeyChangeError,
    KeyReadError,
    KeyDisabledInactivity,
    DailyReadLimit,
    TemporaryError,
    AccessLevelTooLow,
}

impl ApiErrorCode {
    /// All codes in numeric order.
    pub const ALL: [Self; 17] = [
        Self::Unknown,
        Self::KeyEmpty,
        Self::IncorrectKey,
        Self::WrongType,
        Self::WrongFields,
        Self::TooManyRequests,
        Self::IncorrectId,
        Self::IncorrectIdEntityRelation,
        Self::IpBlock,
        Self::ApiDisabled,
        Self::KeyOwnerInFederalJail,
        Self::KeyChangeError,
        Self::KeyReadError,
        Self::KeyDisabledInactivity,
        Self::DailyReadLimit,
        Self::TemporaryError,
        Self::AccessLevelTooLow,
    ];

    /// The numeric code as it appears on the wire.
    pub fn code(self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::KeyEmpty => 1,
            Self::IncorrectKey => 2,
            Self::WrongType => 3,
            Self::WrongFields => 4,
            Self::TooManyRequests => 5,
            Self::IncorrectId => 6,
            Self::IncorrectIdEntityRelation => 7,
            Self::IpBlock => 8,
            Self::ApiDisabled => 9,
            Self::KeyOwnerInFederalJail => 10,
            Self::KeyChangeError => 11,
            Self::KeyReadError => 12,
            Self::KeyDisabledInactivity => 13,
            Self::DailyReadLimit => 14,
            Self::TemporaryError => 15,
            Self::AccessLevelTooLow => 16,
        }
    }

    /// Human-readable explanation of the code.
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown error : Unhandled error, should not occur.",
            Self::KeyEmpty => "Key is empty : Private key is empty in current request.",
            Self::IncorrectKey => "Incorrect Key : Private key is wrong/incorrect format.",
            Self::WrongType => "Wrong type : Requesting an incorrect basic type.",
            Self::WrongFields => "Wrong fields : Requesting incorrect selection fields.",
            Self::TooManyRequests => {
                "Too many requests : Requests are blocked for a small period of time because of too many requests per user (max 100 per minute)."
            }
            Self::IncorrectId => "Incorrect ID : Wrong ID value.",
            Self::IncorrectIdEntityRelation => {
                "Incorrect ID-entity relation : A requested selection is private (For example, personal data of another user / faction)."
            }
            Self::IpBlock => {
                "IP block : Current IP is banned for a small period of time because of abuse."
            }
            Self::ApiDisabled => "API disabled : Api system is currently disabled.",
            Self::KeyOwnerInFederalJail => {
                "Key owner is in federal jail : Current key can't be used because owner is in federal jail."
            }
            Self::KeyChangeError => {
                "Key change error : You can only change your API key once every 60 seconds."
            }
            Self::KeyReadError => "Key read error : Error reading key from Database.",
            Self::KeyDisabledInactivity => {
                "The key is temporarily disabled due to owner inactivity : The key owner hasn't been online for more than 7 days."
            }
            Self::DailyReadLimit => {
                "Daily read limit reached : Too many records have been pulled today by this user from our cloud services."
            }
            Self::TemporaryError => {
                "Temporary error : An error code specifically for testing purposes that has no dedicated meaning."
            }
            Self::AccessLevelTooLow => {
                "Access level of this key is not high enough : A selection is being called of which this key does not have permission to access."
            }
        }
    }
}

impl TryFrom<i64> for ApiErrorCode {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(Error::UnmappedErrorCode { code })
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Map a raw error code to its message, failing for codes outside 0-16.
pub fn error_code_to_message(code: i64) -> Result<&'static str, Error> {
    ApiErrorCode::try_from(code).map(ApiErrorCode::message)
}
