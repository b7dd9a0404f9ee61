use super::api::ApiError;

#[test]
fn invalid_credentials_has_generic_message() {
    let err = ApiError::invalid_credentials();
    assert_eq!(err.message(), "Invalid username or password");
}

#[test]
fn unknown_user_and_wrong_password_share_a_shape() {
    // Both failure paths build the error through the same constructor,
    // so the serialized bodies are identical.
    let a = ApiError::invalid_credentials();
    let b = ApiError::invalid_credentials();
    assert_eq!(a.message(), b.message());
    assert_eq!(format!("{}", a), format!("{}", b));
}

#[test]
fn internal_error_never_carries_detail() {
    let err = ApiError::internal();
    assert_eq!(err.message(), "Internal server error");
}

#[test]
fn not_found_carries_caller_message() {
    let err = ApiError::not_found("Client not found");
    assert_eq!(err.message(), "Client not found");
}
