diesel::table! {
    clipboard_record (id) {
        id -> BigInt,
        html -> Nullable<Text>,
        plain -> Nullable<Text>,
        created_at_ms -> BigInt,
        source_app -> Nullable<Text>,
        size_bytes -> BigInt,
    }
}
