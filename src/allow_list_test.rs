use super::*;

mod list {
    use super::*;

    #[test]
    fn should_keep_order_and_remove_duplicates_when_values_repeat() {
        // Arrange & Act
        let list = AllowList::list(["X-Foo", " x-foo ", "X-Bar"]);

        // Assert
        assert_eq!(
            list,
            AllowList::List(vec!["X-Foo".to_string(), "X-Bar".to_string()])
        );
    }

    #[test]
    fn should_mirror_request_when_values_empty() {
        // Arrange & Act
        let list = AllowList::list(Vec::<String>::new());

        // Assert
        assert_eq!(list, AllowList::MirrorRequest);
    }

    #[test]
    fn should_mirror_request_when_values_blank() {
        // Arrange & Act
        let list = AllowList::list(["", "   "]);

        // Assert
        assert_eq!(list, AllowList::MirrorRequest);
    }
}

mod default {
    use super::*;

    #[test]
    fn when_constructed_should_mirror_request() {
        assert_eq!(AllowList::default(), AllowList::mirror_request());
    }
}

mod values {
    use super::*;

    #[test]
    fn should_return_none_when_not_a_list() {
        assert!(AllowList::MirrorRequest.values().is_none());
        assert!(AllowList::omit().values().is_none());
    }

    #[test]
    fn should_return_slice_when_list() {
        let list = AllowList::list(["GET", "PUT"]);

        assert_eq!(
            list.values(),
            Some(&["GET".to_string(), "PUT".to_string()][..])
        );
    }
}

mod deserialize {
    use super::*;

    #[test]
    fn should_mirror_request_when_value_null() {
        let list: AllowList = serde_json::from_str("null").expect("valid json");

        assert_eq!(list, AllowList::MirrorRequest);
    }

    #[test]
    fn should_mirror_request_when_value_true() {
        let list: AllowList = serde_json::from_str("true").expect("valid json");

        assert_eq!(list, AllowList::MirrorRequest);
    }

    #[test]
    fn should_omit_when_value_false() {
        let list: AllowList = serde_json::from_str("false").expect("valid json");

        assert_eq!(list, AllowList::Omit);
    }

    #[test]
    fn should_build_list_when_value_array() {
        let list: AllowList = serde_json::from_str(r#"["GET", "get", "POST"]"#).expect("valid json");

        assert_eq!(list, AllowList::list(["GET", "POST"]));
    }

    #[test]
    fn should_mirror_request_when_array_empty() {
        let list: AllowList = serde_json::from_str("[]").expect("valid json");

        assert_eq!(list, AllowList::MirrorRequest);
    }

    #[test]
    fn should_fail_when_value_has_unexpected_type() {
        let result = serde_json::from_str::<AllowList>("42");

        assert!(result.is_err());
    }
}
