pub use self::student::{RegNo, Student};

mod student;
