use embedded_hal::{delay::DelayNs, digital::OutputPin};
use embedded_io::{Read, ReadReady, Write};

use crate::{
    client::Device,
    command::sms::{
        responses::{Sms, SENDER_LEN},
        types::{DeleteFlag, MessageFormat},
        DeleteAllMessages, DeleteMessage, ReadMessage, SendMessage, SetMessageFormat, SUBMIT,
    },
    error::{Error, GenericError},
    interpreter::{self, SMS_TAG},
    module_timing,
};

/// Prompt for the message text after `+CMGS`
const PROMPT_TAG: &str = ">";

/// Completion of a send, `+CMGS: <mr>`
const SENT_TAG: &str = "CMGS";

impl<T, D, RST> Device<T, D, RST>
where
    T: Read + Write + ReadReady,
    D: DelayNs,
    RST: OutputPin,
{
    /// Send `text` to `number` in text mode.
    ///
    /// Succeeds once the module reports the message reference.
    pub fn send_sms(&mut self, number: &str, text: &str) -> Result<(), Error> {
        if number.len() > SENDER_LEN {
            error!("Phone number too long: {}", number.len());
            return Err(Error::Generic(GenericError::Unsupported));
        }

        self.command(&SetMessageFormat {
            mode: MessageFormat::Text,
        })?;

        self.session.send_cmd(&SendMessage { number })?;
        self.session.await_pattern(PROMPT_TAG)?;

        self.session.send(text.as_bytes(), true)?;
        self.session.pause(module_timing::sms_settle());
        self.session.send(&[SUBMIT], false)?;

        self.session.await_pattern(SENT_TAG)?;
        debug!("SMS sent");
        Ok(())
    }

    /// Read the message stored at `index`.
    ///
    /// `Ok(None)` when the slot is empty, or when the body is too short to
    /// be a real message.
    pub fn read_sms(&mut self, index: u8) -> Result<Option<Sms>, Error> {
        self.session.send_cmd(&SetMessageFormat {
            mode: MessageFormat::Text,
        })?;
        if self.session.receive()?.is_error() {
            return Err(Error::Modem);
        }

        self.session.send_cmd(&ReadMessage { index })?;
        let response = self.session.receive()?;
        if response.is_empty() {
            return Err(Error::Generic(GenericError::Timeout));
        }

        // The body is free text, so a record is never read as an error reply
        if response.contains(SMS_TAG) {
            return Ok(interpreter::sms(response.as_str()?)?);
        }
        if response.is_error() {
            return Err(Error::Modem);
        }

        trace!("No message at index {}", index);
        Ok(None)
    }

    pub fn delete_sms(&mut self, index: u8) -> Result<(), Error> {
        self.command(&DeleteMessage {
            index,
            flag: DeleteFlag::Index,
        })?;
        Ok(())
    }

    /// Delete every stored message. Requires text mode.
    pub fn delete_all_sms(&mut self) -> Result<(), Error> {
        self.command(&DeleteAllMessages)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::device;

    const MESSAGE: &str = "AT+CMGR=1\r\r\n+CMGR: \"REC UNREAD\",\"+15551234567\",\"\",\"24/01/15,12:30:45+04\"\r\nMeet me at the station at 5\r\n\r\nOK\r\n";

    #[test]
    fn send_sms() {
        let mut modem = device(&[
            "AT+CMGF=1\r\r\nOK\r\n",
            "AT+CMGS=\"+15551234567\"\r\r\n> ",
            "hi\r\n\u{1a}\r\n+CMGS: 12\r\n\r\nOK\r\n",
        ]);

        assert_eq!(modem.send_sms("+15551234567", "hi"), Ok(()));

        let (serial, delay, _) = modem.release();
        assert_eq!(
            serial.written(),
            "AT+CMGF=1\r\nAT+CMGS=\"+15551234567\"\r\nhi\r\n\u{1a}"
        );
        assert_eq!(delay.total_ms(), 100);
    }

    #[test]
    fn send_sms_rejected() {
        let mut modem = device(&["\r\nOK\r\n", "> ", "\r\n+CMS ERROR: 500\r\n"]);
        assert_eq!(modem.send_sms("+15551234567", "hi"), Err(Error::Modem));

        let mut modem = device(&["\r\nERROR\r\n"]);
        assert_eq!(modem.send_sms("+15551234567", "hi"), Err(Error::Modem));
    }

    #[test]
    fn send_sms_without_prompt_writes_no_text() {
        let mut modem = device(&["\r\nOK\r\n"]);

        assert!(modem.send_sms("+15551234567", "hi").unwrap_err().is_timeout());

        let (serial, _, _) = modem.release();
        assert_eq!(serial.count("hi"), 0);
        assert_eq!(serial.count("\u{1a}"), 0);
    }

    #[test]
    fn send_sms_number_too_long() {
        let mut modem = device(&[]);
        assert_eq!(
            modem.send_sms("+123456789012345678901234567890123", "hi"),
            Err(Error::Generic(GenericError::Unsupported))
        );

        let (serial, _, _) = modem.release();
        assert_eq!(serial.written(), "");
    }

    #[test]
    fn read_sms() {
        let mut modem = device(&["\r\nOK\r\n", MESSAGE]);

        let sms = modem.read_sms(1).unwrap().unwrap();
        assert_eq!(sms.sender, "+15551234567");
        assert_eq!(sms.timestamp, "24/01/15,12:30:45+04");
        assert_eq!(sms.message, "Meet me at the station at 5");

        let (serial, _, _) = modem.release();
        assert_eq!(serial.written(), "AT+CMGF=1\r\nAT+CMGR=1\r\n");
    }

    #[test]
    fn read_sms_body_with_error_words() {
        let mut modem = device(&[
            "\r\nOK\r\n",
            "AT+CMGR=1\r\r\n+CMGR: \"REC UNREAD\",\"+15551234567\",\"\",\"24/01/15,12:30:45+04\"\r\nTERRIBLE TRAFFIC ON THE BRIDGE\r\n\r\nOK\r\n",
            "\r\nOK\r\n",
            "+CMGR: \"REC READ\",\"+15551234567\",\"\",\"24/01/15,12:31:00+04\"\r\nERROR\r\n\r\nOK\r\n",
        ]);

        let sms = modem.read_sms(1).unwrap().unwrap();
        assert_eq!(sms.message, "TERRIBLE TRAFFIC ON THE BRIDGE");

        // A five character body is below the message threshold
        assert_eq!(modem.read_sms(2), Ok(None));
    }

    #[test]
    fn read_sms_full_length_body() {
        let body = "A".repeat(160);
        let reply = std::format!(
            "AT+CMGR=7\r\r\n+CMGR: \"REC UNREAD\",\"+15551234567\",\"Somebody With A Long Name\",\"24/01/15,12:30:45+04\"\r\n{}\r\n\r\nOK\r\n",
            body
        );
        let mut modem = device(&["\r\nOK\r\n", &reply]);

        let sms = modem.read_sms(7).unwrap().unwrap();
        assert_eq!(sms.message.as_str(), body);

        let (serial, _, _) = modem.release();
        assert_eq!(serial.pending(), 0);
    }

    #[test]
    fn send_sms_with_separate_text_echo() {
        let mut modem = device(&[
            "\r\nOK\r\n",
            "> ",
            "TERRIBLE NEWS\r\n",
            "\u{1a}\r\n+CMGS: 12\r\n\r\nOK\r\n",
        ]);

        assert_eq!(modem.send_sms("+15551234567", "TERRIBLE NEWS"), Ok(()));
    }

    #[test]
    fn read_sms_empty_slot() {
        let mut modem = device(&["\r\nOK\r\n", "AT+CMGR=4\r\r\nOK\r\n"]);
        assert_eq!(modem.read_sms(4), Ok(None));
    }

    #[test]
    fn read_sms_failures() {
        let mut modem = device(&["\r\nERROR\r\n"]);
        assert_eq!(modem.read_sms(1), Err(Error::Modem));

        let mut modem = device(&["\r\nOK\r\n", "\r\n+CMS ERROR: 321\r\n"]);
        assert_eq!(modem.read_sms(1), Err(Error::Modem));

        let mut modem = device(&["\r\nOK\r\n"]);
        assert!(modem.read_sms(1).unwrap_err().is_timeout());
    }

    #[test]
    fn delete() {
        let mut modem = device(&["\r\nOK\r\n", "\r\nOK\r\n"]);

        assert_eq!(modem.delete_sms(3), Ok(()));
        assert_eq!(modem.delete_all_sms(), Ok(()));

        let (serial, _, _) = modem.release();
        assert_eq!(
            serial.written(),
            "AT+CMGD=3,0\r\nAT+CMGDA=\"DEL ALL\"\r\n"
        );
    }
}
