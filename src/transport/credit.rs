use serde::Deserialize;

use super::envelope::Envelope;

#[derive(Debug, Deserialize)]
struct CreditJsonResponse {
    credit: f64,
}

pub fn decode_credit(envelope: &Envelope) -> Result<f64, serde_json::Error> {
    let parsed: CreditJsonResponse = envelope.decode_data()?;
    Ok(parsed.credit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_credit_reads_fractional_value() {
        let env = Envelope::from_slice(
            br#"{"status": "ok", "code": "0", "data": {"credit": 125000.5}}"#,
        )
        .unwrap();
        assert_eq!(decode_credit(&env).unwrap(), 125000.5);
    }

    #[test]
    fn decode_credit_accepts_integer_value() {
        let env =
            Envelope::from_slice(br#"{"status": "ok", "code": "0", "data": {"credit": 0}}"#)
                .unwrap();
        assert_eq!(decode_credit(&env).unwrap(), 0.0);
    }
}
