use std::io;

use crate::SystemProcessors;

/// A preparatory action executed by [`run_stages()`] before the processor report is emitted.
///
/// Each stage consumes its own input type, so two stages in the same run may operate on
/// entirely unrelated data.
///
/// # Example
///
/// ```
/// use cpu_report::Stage;
///
/// struct LoadConfig;
///
/// impl Stage for LoadConfig {
///     type Input = String;
///
///     fn execute(&self, path: Self::Input) {
///         println!("loading configuration from {path}");
///     }
/// }
/// ```
#[cfg_attr(test, mockall::automock(type Input = u32;))]
pub trait Stage {
    /// The input consumed by the stage.
    type Input;

    /// Performs the stage's work.
    fn execute(&self, input: Self::Input);
}

/// Executes two preparatory stages in order, then emits a processor report.
///
/// The sequence of observable actions is fixed:
///
/// 1. an announcement line is written to `output`;
/// 2. `first` executes with `first_input`;
/// 3. `second` executes with `second_input`;
/// 4. a blank line and a `processor info:` header are written to `output`;
/// 5. the [report][SystemProcessors::report] for `processors` is written to `output`.
///
/// # Errors
///
/// Returns any error encountered while writing to `output`. Stage failures are not
/// intercepted - stages that can fail should handle or panic on their own errors.
///
/// # Example
///
/// ```
/// use std::io;
///
/// use cpu_report::{Stage, SystemProcessors, run_stages};
///
/// struct Announce;
///
/// impl Stage for Announce {
///     type Input = &'static str;
///
///     fn execute(&self, message: Self::Input) {
///         println!("{message}");
///     }
/// }
///
/// run_stages(
///     &Announce,
///     "first",
///     &Announce,
///     "second",
///     SystemProcessors::current(),
///     &mut io::stdout(),
/// )
/// .unwrap();
/// ```
pub fn run_stages<A, B, W>(
    first: &A,
    first_input: A::Input,
    second: &B,
    second_input: B::Input,
    processors: &SystemProcessors,
    output: &mut W,
) -> io::Result<()>
where
    A: Stage + ?Sized,
    B: Stage + ?Sized,
    W: io::Write + ?Sized,
{
    writeln!(output, "running preparatory stages")?;

    first.execute(first_input);
    second.execute(second_input);

    writeln!(output)?;
    writeln!(output, "processor info:")?;
    write!(output, "{}", processors.report())?;

    Ok(())
}
