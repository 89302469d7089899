use std::ops::Deref;

use serde::Deserialize;

/// A human readable duration such as `15s`, `1m 30s` or `250ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.split_whitespace()
            .try_fold(std::time::Duration::ZERO, |acc, part| {
                parse_part(part).map(|part| acc + part)
            })
            .map(Self)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid duration: {s:?}")))
    }
}

fn parse_part(part: &str) -> Option<std::time::Duration> {
    let split = part.find(|c: char| !c.is_ascii_digit())?;
    let (value, unit) = part.split_at(split);
    let value = value.parse::<u64>().ok()?;
    let duration = match unit {
        "ms" => std::time::Duration::from_millis(value),
        "s" => std::time::Duration::from_secs(value),
        "m" => std::time::Duration::from_secs(value.checked_mul(60)?),
        "h" => std::time::Duration::from_secs(value.checked_mul(60 * 60)?),
        "d" => std::time::Duration::from_secs(value.checked_mul(24 * 60 * 60)?),
        _ => return None,
    };
    Some(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("15s", Some(15_000)),
            ("250ms", Some(250)),
            ("2m", Some(2 * 60_000)),
            ("1h", Some(60 * 60_000)),
            ("1d", Some(24 * 60 * 60_000)),
            ("", Some(0)),
            ("1m 30s 500ms", Some(90_500)),
            ("15", None),
            ("s", None),
            ("7dd", None),
            ("-3s", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input.clone())
                .ok()
                .map(|x| x.0.as_millis() as u64);
            assert_eq!(output, expected, "{input}");
        }
    }
}
