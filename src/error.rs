#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GenericError {
    Timeout,
    Unsupported,
}

/// Reasons a captured reply could not be turned into a structured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// The tag identifying the reply was not found.
    MissingTag,
    /// The reply ended before the expected field.
    MissingField,
    /// A numeric field did not start with a decimal digit.
    InvalidNumber,
    /// A numeric field is outside of its documented range.
    OutOfRange,
    /// The reply is not valid UTF-8.
    Utf8,
    /// A field does not fit its bounded storage.
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The modem answered with an error result code (`ERROR`, `+CME ERROR`,
    /// `+CMS ERROR`).
    Modem,

    /// The modem accepted a setting, but reading it back shows the old state.
    Rejected,

    Parse(ParseError),

    // Generic shared errors
    Generic(GenericError),

    Io(embedded_io::ErrorKind),

    IoPin,
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<GenericError> for Error {
    fn from(e: GenericError) -> Self {
        Self::Generic(e)
    }
}

impl Error {
    /// `true` if no matching reply arrived within the polling budget.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Generic(GenericError::Timeout))
    }
}
