/// Asserts that evaluating `$run` panics, optionally checking that the panic message contains
/// `$needle`.
macro_rules! assert_panics {
    ($run:expr) => {
        assert_panics!($run, "")
    };
    ($run:expr, $needle:literal) => {{
        let payload = std::panic::catch_unwind(|| {
            let _ = $run;
        })
        .expect_err("assertion failed to panic");

        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();

        assert!(
            message.contains($needle),
            "panic message {message:?} doesn't mention {:?}",
            $needle
        );
        println!("^ panic caught");
    }};
}

pub(crate) use assert_panics;
