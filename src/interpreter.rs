//! Extraction of structured values from captured replies.
//!
//! Replies are loosely delimited ASCII: a tag, then comma separated fields,
//! some of them quoted, possibly with commas inside the quotes, and for SMS
//! a free text line after the header. Nothing here panics; each step that
//! can fail maps to a [`ParseError`].

use core::ops::RangeInclusive;
use heapless::String;

use crate::{
    command::{mobile_control::responses::DateTime, sms::responses::Sms},
    error::ParseError,
};

pub const SIGNAL_TAG: &str = "+CSQ: ";
pub const SMS_TAG: &str = "CMGR:";

/// Message bodies of at most this many characters are reported as no
/// message at all.
pub const MIN_MESSAGE_LEN: usize = 10;

/// `+CSQ` reports this when the signal level is not known
const RSSI_UNKNOWN: u8 = 99;

/// Splits a reply header into its comma separated fields.
///
/// Commas inside double quotes do not separate fields. Each yielded field is
/// trimmed and stripped of its enclosing quotes.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    rest: Option<&'a str>,
}

impl<'a> Fields<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: Some(line) }
    }

    /// The next field, or [`ParseError::MissingField`] once the line is
    /// exhausted.
    pub fn expect_next(&mut self) -> Result<&'a str, ParseError> {
        self.next().ok_or(ParseError::MissingField)
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;

        let mut quoted = false;
        let mut split = None;
        for (i, c) in rest.char_indices() {
            match c {
                '"' => quoted = !quoted,
                ',' if !quoted => {
                    split = Some(i);
                    break;
                }
                _ => {}
            }
        }

        let field = match split {
            Some(i) => {
                self.rest = Some(&rest[i + 1..]);
                &rest[..i]
            }
            None => {
                self.rest = None;
                rest
            }
        };

        Some(unquote(field.trim()))
    }
}

fn unquote(field: &str) -> &str {
    match field.strip_prefix('"') {
        Some(inner) => inner.strip_suffix('"').unwrap_or(inner),
        None => field,
    }
}

/// Everything after the first occurrence of `tag`
fn after_tag<'a>(reply: &'a str, tag: &str) -> Result<&'a str, ParseError> {
    reply
        .find(tag)
        .map(|i| &reply[i + tag.len()..])
        .ok_or(ParseError::MissingTag)
}

/// Splits off the first line, without its `\r\n`
fn split_line(s: &str) -> (&str, &str) {
    match s.find('\n') {
        Some(i) => (s[..i].trim_end_matches('\r'), &s[i + 1..]),
        None => (s.trim_end_matches('\r'), ""),
    }
}

/// Decimal value of the leading digits of `window`
fn leading_number(window: &[u8]) -> Result<u8, ParseError> {
    let digits = window.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return Err(ParseError::InvalidNumber);
    }

    window[..digits]
        .iter()
        .try_fold(0u8, |acc, d| acc.checked_mul(10)?.checked_add(d - b'0'))
        .ok_or(ParseError::OutOfRange)
}

fn bounded<const N: usize>(field: &str) -> Result<String<N>, ParseError> {
    String::try_from(field).map_err(|_| ParseError::Overflow)
}

/// Signal level from a `+CSQ: <rssi>,<ber>` reply, 0-31.
///
/// Only the two characters after the tag are considered. An unknown level
/// (99) reads as 0, i.e. no signal.
pub fn signal_quality(reply: &str) -> Result<u8, ParseError> {
    let value = after_tag(reply, SIGNAL_TAG)?.as_bytes();
    let rssi = leading_number(&value[..value.len().min(2)])?;

    match rssi {
        0..=31 => Ok(rssi),
        RSSI_UNKNOWN => Ok(0),
        _ => Err(ParseError::OutOfRange),
    }
}

/// Text mode message from a `+CMGR` reply.
///
/// The header is `+CMGR: "<stat>","<oa>","<alpha>","<scts>"` and the body
/// is the line following it. A body of [`MIN_MESSAGE_LEN`] characters or
/// less yields `None`.
pub fn sms(reply: &str) -> Result<Option<Sms>, ParseError> {
    let (header, rest) = split_line(after_tag(reply, SMS_TAG)?);

    let mut fields = Fields::new(header);
    let _status = fields.expect_next()?;
    let sender = fields.expect_next()?;
    let _alpha = fields.expect_next()?;
    let timestamp = fields.expect_next()?;

    let (message, _) = split_line(rest);
    if message.chars().count() <= MIN_MESSAGE_LEN {
        return Ok(None);
    }

    Ok(Some(Sms {
        sender: bounded(sender)?,
        timestamp: bounded(timestamp)?,
        message: bounded(message)?,
    }))
}

/// Clock reading from the first quoted `yy/MM/dd,hh:mm:ss±zz` segment of a
/// reply. The timezone suffix is ignored.
pub fn clock(reply: &str) -> Result<DateTime, ParseError> {
    let quoted = after_tag(reply, "\"")?;
    let segment = match quoted.find('"') {
        Some(end) => &quoted[..end],
        None => quoted,
    };
    let bytes = segment.as_bytes();

    let component = |offset: usize, range: RangeInclusive<u8>| -> Result<u8, ParseError> {
        let window = bytes
            .get(offset..offset + 2)
            .ok_or(ParseError::MissingField)?;
        let value = leading_number(window)?;
        if range.contains(&value) {
            Ok(value)
        } else {
            Err(ParseError::OutOfRange)
        }
    };

    Ok(DateTime {
        year: component(0, 0..=99)?,
        month: component(3, 1..=12)?,
        day: component(6, 1..=31)?,
        hour: component(9, 0..=23)?,
        minute: component(12, 0..=59)?,
        second: component(15, 0..=59)?,
    })
}
