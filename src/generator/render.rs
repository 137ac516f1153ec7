use std::{fs, path::Path};

use super::{Job, Rasterizer, scratch::stage_svg};
use crate::error::{Error, Result};
use crate::model::{Failed, IconDefinition, IconSet, OnError, Rendered, Report};
use crate::utils::{digest, png_path};

pub(crate) struct Batch<'a> {
    pub rasterizers: &'a [Box<dyn Rasterizer>],
    pub scratch_dir: &'a Path,
    pub on_error: OnError,
}

/// Renders one icon, trying each rasterizer in order until one is
/// available.
pub(crate) fn render_one(
    batch: &Batch<'_>,
    icon: &IconDefinition,
    size: u32,
    output: &Path,
) -> Result<Rendered> {
    let staged = stage_svg(batch.scratch_dir, &icon.name, &icon.markup)?;

    let job = Job {
        name: &icon.name,
        markup: &icon.markup,
        source: staged.path(),
        output,
        size,
    };

    for rasterizer in batch.rasterizers {
        match rasterizer.rasterize(&job) {
            Ok(()) => {
                let png = fs::read(output).map_err(|source| Error::Write {
                    path: output.to_path_buf(),
                    source,
                })?;

                log::debug!("{} rendered by {}", icon.name, rasterizer.name());
                return Ok(Rendered {
                    name: icon.name.clone(),
                    path: output.to_path_buf(),
                    digest: digest(png),
                });
            }
            Err(Error::ToolNotFound { program }) => {
                log::debug!("{program} not found, falling back for {}", icon.name);
            }
            Err(err) => return Err(err),
        }
    }

    Err(Error::NoRasterizer(icon.name.clone()))
}

pub(crate) fn render_all(batch: &Batch<'_>, icons: &IconSet, output_dir: &Path) -> Result<Report> {
    let mut report = Report::default();
    let size = icons.style().size();

    for icon in icons.iter() {
        let output = png_path(output_dir, &icon.name);

        match render_one(batch, icon, size, &output) {
            Ok(rendered) => {
                log::info!("Generated {}.png", icon.name);
                report.rendered.push(rendered);
            }
            Err(error) => match batch.on_error {
                OnError::Abort => return Err(error),
                OnError::Continue => {
                    log::error!("{error}");
                    report.failed.push(Failed {
                        name: icon.name.clone(),
                        error,
                    });
                }
            },
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Outcome = fn(&Job<'_>) -> Result<()>;

    /// Records calls and answers with a canned outcome.
    struct Scripted {
        name: &'static str,
        outcome: Outcome,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl Rasterizer for Scripted {
        fn name(&self) -> &str {
            self.name
        }

        fn rasterize(&self, job: &Job<'_>) -> Result<()> {
            assert!(job.source.exists(), "svg must be staged before rasterizing");
            self.calls.borrow_mut().push(self.name.to_string());
            (self.outcome)(job)
        }
    }

    fn missing(_: &Job<'_>) -> Result<()> {
        Err(Error::ToolNotFound {
            program: "missing".to_string(),
        })
    }

    fn broken(job: &Job<'_>) -> Result<()> {
        Err(Error::Rasterize {
            name: job.name.to_string(),
            strategy: "broken".to_string(),
            reason: "exit status: 1".to_string(),
        })
    }

    fn writes(job: &Job<'_>) -> Result<()> {
        fs::write(job.output, b"png").unwrap();
        Ok(())
    }

    fn breaks_on_two(job: &Job<'_>) -> Result<()> {
        if job.name == "two" {
            broken(job)
        } else {
            writes(job)
        }
    }

    /// Per-thread log capture, so parallel tests do not see each other.
    mod capture {
        use log::{Level, LevelFilter, Log, Metadata, Record};
        use std::cell::RefCell;
        use std::sync::Once;

        thread_local! {
            static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
        }

        struct Capture;

        impl Log for Capture {
            fn enabled(&self, _: &Metadata<'_>) -> bool {
                true
            }

            fn log(&self, record: &Record<'_>) {
                RECORDS.with(|records| {
                    records
                        .borrow_mut()
                        .push((record.level(), record.args().to_string()))
                });
            }

            fn flush(&self) {}
        }

        static LOGGER: Capture = Capture;
        static INIT: Once = Once::new();

        pub(super) fn start() {
            INIT.call_once(|| {
                log::set_logger(&LOGGER).unwrap();
                log::set_max_level(LevelFilter::Trace);
            });
            RECORDS.with(|records| records.borrow_mut().clear());
        }

        pub(super) fn info_lines() -> Vec<String> {
            RECORDS.with(|records| {
                records
                    .borrow()
                    .iter()
                    .filter(|(level, _)| *level == Level::Info)
                    .map(|(_, message)| message.clone())
                    .collect()
            })
        }
    }

    fn scripted(
        calls: &Rc<RefCell<Vec<String>>>,
        steps: &[(&'static str, Outcome)],
    ) -> Vec<Box<dyn Rasterizer>> {
        steps
            .iter()
            .map(|&(name, outcome)| {
                Box::new(Scripted {
                    name,
                    outcome,
                    calls: calls.clone(),
                }) as Box<dyn Rasterizer>
            })
            .collect()
    }

    fn icon() -> IconDefinition {
        IconDefinition {
            name: "tips".to_string(),
            markup: "<svg/>".to_string(),
        }
    }

    #[test]
    fn falls_back_only_when_tool_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let calls = Rc::default();
        let rasterizers = scripted(
            &calls,
            &[("missing", missing as Outcome), ("writes", writes as Outcome)],
        );
        let batch = Batch {
            rasterizers: &rasterizers,
            scratch_dir: dir.path(),
            on_error: OnError::Abort,
        };

        let output = dir.path().join("tips.png");
        let rendered = render_one(&batch, &icon(), 96, &output).unwrap();

        assert_eq!(*calls.borrow(), ["missing", "writes"]);
        assert_eq!(rendered.path, output);
        assert_eq!(rendered.digest, digest(b"png"));
    }

    #[test]
    fn other_failures_do_not_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let calls = Rc::default();
        let rasterizers = scripted(
            &calls,
            &[("broken", broken as Outcome), ("writes", writes as Outcome)],
        );
        let batch = Batch {
            rasterizers: &rasterizers,
            scratch_dir: dir.path(),
            on_error: OnError::Abort,
        };

        let err = render_one(&batch, &icon(), 96, &dir.path().join("tips.png")).unwrap_err();

        assert!(matches!(err, Error::Rasterize { .. }));
        assert_eq!(*calls.borrow(), ["broken"]);
    }

    #[test]
    fn every_tool_missing() {
        let dir = tempfile::tempdir().unwrap();
        let calls = Rc::default();
        let rasterizers = scripted(
            &calls,
            &[("missing", missing as Outcome), ("missing", missing as Outcome)],
        );
        let batch = Batch {
            rasterizers: &rasterizers,
            scratch_dir: dir.path(),
            on_error: OnError::Abort,
        };

        let err = render_one(&batch, &icon(), 96, &dir.path().join("tips.png")).unwrap_err();
        assert!(matches!(err, Error::NoRasterizer(name) if name == "tips"));
    }

    #[test]
    fn staged_svg_is_removed_after_failure() {
        let scratch = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let calls = Rc::default();
        let rasterizers = scripted(&calls, &[("broken", broken as Outcome)]);
        let batch = Batch {
            rasterizers: &rasterizers,
            scratch_dir: scratch.path(),
            on_error: OnError::Abort,
        };

        render_one(&batch, &icon(), 96, &out.path().join("tips.png")).unwrap_err();
        assert_eq!(fs::read_dir(scratch.path()).unwrap().count(), 0);
    }

    #[test]
    fn continue_collects_failures() {
        let dir = tempfile::tempdir().unwrap();
        let calls = Rc::default();
        let rasterizers = scripted(&calls, &[("broken", broken as Outcome)]);
        let batch = Batch {
            rasterizers: &rasterizers,
            scratch_dir: dir.path(),
            on_error: OnError::Continue,
        };
        let icons = IconSet::expand(
            crate::model::Style::default(),
            [("one", "<svg/>"), ("two", "<svg/>")],
        )
        .unwrap();

        let report = render_all(&batch, &icons, dir.path()).unwrap();

        assert!(!report.is_success());
        assert!(report.rendered.is_empty());
        let failed: Vec<_> = report.failed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(failed, ["one", "two"]);
    }

    fn numbered() -> IconSet {
        IconSet::expand(
            crate::model::Style::default(),
            [("one", "<svg/>"), ("two", "<svg/>"), ("three", "<svg/>")],
        )
        .unwrap()
    }

    #[test]
    fn one_confirmation_per_rendered_icon() {
        capture::start();
        let dir = tempfile::tempdir().unwrap();
        let calls = Rc::default();
        let rasterizers = scripted(&calls, &[("breaks_on_two", breaks_on_two as Outcome)]);
        let batch = Batch {
            rasterizers: &rasterizers,
            scratch_dir: dir.path(),
            on_error: OnError::Continue,
        };

        let report = render_all(&batch, &numbered(), dir.path()).unwrap();

        assert_eq!(report.failed.len(), 1);
        assert_eq!(
            capture::info_lines(),
            ["Generated one.png", "Generated three.png"]
        );
    }

    #[test]
    fn abort_stops_confirmations_at_the_failure() {
        capture::start();
        let dir = tempfile::tempdir().unwrap();
        let calls = Rc::default();
        let rasterizers = scripted(&calls, &[("breaks_on_two", breaks_on_two as Outcome)]);
        let batch = Batch {
            rasterizers: &rasterizers,
            scratch_dir: dir.path(),
            on_error: OnError::Abort,
        };

        render_all(&batch, &numbered(), dir.path()).unwrap_err();

        assert_eq!(capture::info_lines(), ["Generated one.png"]);
        assert!(!dir.path().join("three.png").exists());
    }
}
