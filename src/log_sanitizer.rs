//! Shortening cPanel response bodies for debug logs. A `fetchzone` body holds the whole zone.

const LOG_BODY_LIMIT: usize = 256;

/// At most 256 bytes of `body`, cut on a char boundary, followed by the full
/// length when anything was dropped. Errors keep the whole body; only log lines use this.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= LOG_BODY_LIMIT {
        return body.to_string();
    }
    let cut = body
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|end| *end <= LOG_BODY_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [{} bytes total]", &body[..cut], body.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        assert_eq!(
            truncate_for_log("{\"cpanelresult\":{}}"),
            "{\"cpanelresult\":{}}"
        );
        let exact = "x".repeat(LOG_BODY_LIMIT);
        assert_eq!(truncate_for_log(&exact), exact);
    }

    #[test]
    fn long_body_cut_at_limit() {
        let body = "a".repeat(LOG_BODY_LIMIT + 100);
        let logged = truncate_for_log(&body);
        assert_eq!(
            logged,
            format!("{}... [356 bytes total]", "a".repeat(LOG_BODY_LIMIT))
        );
    }

    #[test]
    fn multibyte_chars_not_split() {
        // 2-byte chars: the 256-byte limit lands exactly after the 128th.
        let body = "\u{e9}".repeat(200);
        let logged = truncate_for_log(&body);
        assert_eq!(
            logged,
            format!("{}... [400 bytes total]", "\u{e9}".repeat(128))
        );

        // 3-byte chars: 85 fit in 255 bytes, the 86th would cross the limit.
        let body = "\u{20ac}".repeat(100);
        let logged = truncate_for_log(&body);
        assert!(logged.starts_with(&"\u{20ac}".repeat(85)));
        assert!(logged.ends_with("... [300 bytes total]"));
    }
}
