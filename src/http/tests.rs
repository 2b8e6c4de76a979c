#[cfg(test)]
mod http_tests {
    mod bencode_tests {
        use crate::http::http::{http_bencode_allow, http_bencode_failure, http_parse_bind_address};

        #[test]
        fn test_allow_body() {
            assert_eq!(http_bencode_allow(), b"d6:status5:allowe".to_vec());
        }

        #[test]
        fn test_failure_body_carries_reason_length() {
            assert_eq!(http_bencode_failure("unapproved torrent"), b"d14:failure reason18:unapproved torrente".to_vec());
            assert_eq!(http_bencode_failure(""), b"d14:failure reason0:e".to_vec());
        }

        #[test]
        fn test_failure_body_counts_bytes_not_chars() {
            assert_eq!(http_bencode_failure("é"), "d14:failure reason2:ée".as_bytes().to_vec());
        }

        #[test]
        fn test_parse_bind_address() {
            assert!(http_parse_bind_address("127.0.0.1:6970").is_ok());
            assert!(http_parse_bind_address("[::1]:6970").is_ok());
            assert!(http_parse_bind_address("localhost").is_err());
        }
    }
}
