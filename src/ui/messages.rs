//! Validation and status text rendered by the application's forms.

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const ACCOUNT_CREATED: &str = "Account created successfully!";
pub const LOGIN_LINK: &str = "Already have an account? Sign in";
pub const SIGN_IN_HEADING: &str = "Sign in to your account";

pub const TITLE_REQUIRED: &str = "Title is required";
pub const TITLE_TOO_LONG: &str = "Title must be less than 100 characters";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
/// Shown for descriptions over 750 characters; the text says 500.
pub const DESCRIPTION_TOO_LONG: &str = "Description must be less than 500 characters";

pub const REVIEW_CONTENT_REQUIRED: &str = "Review content is required";
pub const RATING_REQUIRED: &str = "Rating is required";
pub const ALREADY_REVIEWED: &str = "You have already reviewed this book";
pub const SIGN_IN_TO_REVIEW: &str = "Sign in to leave a review";

pub const ADD_NEW_BOOK: &str = "Add New Book";
pub const SIGN_IN: &str = "Sign In";
pub const CREATE_ACCOUNT: &str = "Create account";
