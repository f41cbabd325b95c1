pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 750;
pub const NAME_MIN_CHARS: usize = 2;
pub const PASSWORD_MIN_CHARS: usize = 8;
