use eyre::EyreHandler;
use itertools::Itertools;
use std::{error::Error, fmt};

/// An `eyre` context that renders an error chain on a single line,
/// dropping causes that merely repeat their parent's message.
pub struct Handler;

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Display;
        dedup_chain(error).into_iter().format("; ").fmt(f)
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return fmt::Debug::fmt(error, f);
        }
        let errors = dedup_chain(error);
        let (error, sources) = errors.split_first().expect("error chain is never empty");
        write!(f, "{error}")?;

        if !sources.is_empty() {
            write!(f, "\n\nContext:")?;
            for source in sources {
                write!(f, "\n- {source}")?;
            }
        }
        Ok(())
    }
}

fn dedup_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut causes = Vec::new();
    let mut current = Some(error);
    while let Some(err) = current {
        causes.push(err.to_string().trim().to_string());
        current = err.source();
    }
    // Collapse the common pattern `msg1: msg2; msg2` -> `msg1: msg2`.
    causes.dedup_by(|b, a| a.contains(b.as_str()));
    causes
}

/// Installs the `eyre` and panic hooks as the global ones.
pub fn install() {
    let (panic_hook, _) = color_eyre::config::HookBuilder::default()
        .panic_section("This is a bug. Consider reporting it at https://github.com/breakgen-rs/breakgen")
        .into_hooks();
    panic_hook.install();

    if let Err(err) = eyre::set_hook(Box::new(|_| Box::new(Handler))) {
        debug!("failed to install eyre error hook: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedups_contained_causes() {
        #[derive(Debug, thiserror::Error)]
        #[error("my error: {0}")]
        struct A(#[from] B);

        #[derive(Debug, thiserror::Error)]
        #[error("{0}")]
        struct B(String);

        let report = eyre::Report::from(A(B("hello".into())));
        assert_eq!(report.chain().count(), 2);
        let chained: &(dyn Error + 'static) = report.as_ref();
        assert_eq!(dedup_chain(chained), ["my error: hello"]);
    }
}
