#[derive(thiserror::Error, Debug)]
pub enum RealmError {
    #[error("Type error: {message}")]
    TypeError { message: String },

    #[error("Global '{name}' not found")]
    GlobalNotFound { name: String },

    #[error("Realm setup failed at {method} {file}:{line}: {message}")]
    SetupError {
        message: String,
        file: String,
        line: usize,
        method: String,
    },

    #[error("std::io error: {0}")]
    IoError(#[from] std::io::Error),
}

#[macro_export]
macro_rules! raise_type_error {
    ($msg:expr) => {
        $crate::RealmError::TypeError { message: $msg.to_string() }
    };
}

// Macro that constructs a SetupError using the compile-time caller
// location. Using a macro (rather than a function) ensures `file!()` and
// `line!()` expand to the site where the macro is invoked.
#[macro_export]
macro_rules! setup_error_here {
    ($msg:expr) => {
        $crate::RealmError::SetupError {
            message: $msg.to_string(),
            file: file!().to_string(),
            line: line!() as usize,
            method: $crate::function_name!().to_string(),
        }
    };
}

#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // remove the trailing "::f"
        &name[..name.len() - 3]
    }};
}
