use super::*;

mod origin_matcher {
    use super::*;

    mod exact {
        use super::*;

        #[test]
        fn when_candidate_identical_should_match() {
            // Arrange
            let matcher = OriginMatcher::exact("https://api.test");

            // Act & Assert
            assert!(matcher.matches("https://api.test"));
        }

        #[test]
        fn when_candidate_differs_only_in_case_should_not_match() {
            // Arrange
            let matcher = OriginMatcher::exact("https://api.test");

            // Act & Assert
            assert!(!matcher.matches("https://API.test"));
        }

        #[test]
        fn when_candidate_has_other_port_should_not_match() {
            // Arrange
            let matcher = OriginMatcher::from("https://api.test");

            // Act & Assert
            assert!(!matcher.matches("https://api.test:8443"));
        }
    }

    mod pattern_str {
        use super::*;

        #[test]
        fn when_pattern_valid_should_match_case_insensitively() {
            // Arrange
            let matcher = OriginMatcher::pattern_str(r"^https://.*\.allowed\.dev$")
                .expect("valid pattern");

            // Act & Assert
            assert!(matcher.matches("https://api.allowed.dev"));
            assert!(matcher.matches("HTTPS://API.ALLOWED.DEV"));
            assert!(!matcher.matches("https://allowed.dev.evil"));
        }

        #[test]
        fn when_pattern_invalid_should_return_build_error() {
            // Arrange & Act
            let result = OriginMatcher::pattern_str("(unclosed");

            // Assert
            assert!(matches!(result, Err(PatternError::Build(_))));
        }

        #[test]
        fn when_pattern_too_long_should_return_too_long_error() {
            // Arrange
            let pattern = "a".repeat(MAX_PATTERN_LENGTH + 1);

            // Act
            let result = OriginMatcher::pattern_str(&pattern);

            // Assert
            match result {
                Err(PatternError::TooLong { length, max }) => {
                    assert_eq!(length, MAX_PATTERN_LENGTH + 1);
                    assert_eq!(max, MAX_PATTERN_LENGTH);
                }
                other => panic!("expected too long error, got {other:?}"),
            }
        }

        #[test]
        fn when_budget_exhausted_should_return_timeout_error() {
            // Arrange & Act
            let result = OriginMatcher::pattern_str_with_budget(
                r"^https://.*\.slow\.dev$",
                Duration::from_nanos(0),
            );

            // Assert
            assert!(matches!(result, Err(PatternError::Timeout { .. })));
        }
    }
}

mod allowed_origins {
    use super::*;

    #[test]
    fn when_any_should_match_every_origin() {
        // Arrange
        let origins = AllowedOrigins::any();

        // Act & Assert
        assert!(origins.is_any());
        assert!(origins.matches("https://anything.example"));
        assert!(origins.matches("null"));
    }

    #[test]
    fn when_default_should_be_any() {
        assert!(AllowedOrigins::default().is_any());
    }

    #[test]
    fn when_list_should_match_members_only() {
        // Arrange
        let origins = AllowedOrigins::list(["https://a.test", "https://b.test"]);

        // Act & Assert
        assert!(!origins.is_any());
        assert!(origins.matches("https://b.test"));
        assert!(!origins.matches("https://c.test"));
    }

    #[test]
    fn when_list_mixes_exact_and_pattern_should_match_either() {
        // Arrange
        let origins = AllowedOrigins::list([
            OriginMatcher::exact("https://exact.test"),
            OriginMatcher::pattern_str(r"^https://[a-z]+\.hybrid\.dev$").expect("valid pattern"),
        ]);

        // Act & Assert
        assert!(origins.matches("https://exact.test"));
        assert!(origins.matches("https://api.hybrid.dev"));
        assert!(!origins.matches("https://api.other.dev"));
    }

    #[test]
    fn when_origin_exceeds_length_limit_should_not_match_list() {
        // Arrange
        let long_origin = format!("https://{}.test", "a".repeat(MAX_ORIGIN_LENGTH));
        let origins = AllowedOrigins::list([
            OriginMatcher::pattern_str(r"^https://a+\.test$").expect("valid pattern"),
        ]);

        // Act & Assert
        assert!(!origins.matches(&long_origin));
    }

    #[test]
    fn when_list_empty_should_match_nothing() {
        // Arrange
        let origins = AllowedOrigins::List(Vec::new());

        // Act & Assert
        assert!(!origins.matches("https://a.test"));
    }

    mod allows_all {
        use super::*;

        #[test]
        fn when_every_origin_matches_should_allow() {
            let origins = AllowedOrigins::list(["https://a.test", "https://b.test"]);

            assert!(origins.allows_all(&["https://a.test", "https://b.test"]));
        }

        #[test]
        fn when_one_origin_missing_should_reject() {
            let origins = AllowedOrigins::list(["https://a.test"]);

            assert!(!origins.allows_all(&["https://a.test", "https://evil.test"]));
        }

        #[test]
        fn when_no_origins_should_reject_even_for_any() {
            assert!(!AllowedOrigins::any().allows_all(&[]));
        }
    }
}
