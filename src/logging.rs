use std::cell::RefCell;
use log::LevelFilter::*;
use parking_lot::Mutex;

thread_local! {
    static LOG: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

pub fn take_log() -> Vec<String> {
    LOG.with(|log| {
        log.replace(Vec::new())
    })
}

struct JsLog;

impl log::Log for JsLog {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        #[cfg(not(test))]
        #[cfg(not(feature = "separate_messages"))]
        LOG.with(|log| {
            log.borrow_mut().push(format!("{}", record.args()));
        });
        #[cfg(not(test))]
        #[cfg(feature = "separate_messages")]
        web_sys::console::log_1(&js_sys::JsString::from(format!("{}", record.args())));
        #[cfg(test)]
        println!("{}", record.args());
    }

    fn flush(&self) {}
}

static LOGGING_INITIALIZED: Mutex<bool> = Mutex::new(false);

/// Sets up the logger. Calls after the first one do nothing, so it is safe to call on each `setup`.
pub fn init_logging(verbosity: log::LevelFilter) {
    let mut initialized = LOGGING_INITIALIZED.lock();
    if *initialized {
        return;
    }
    *initialized = true;

    let result = fern::Dispatch::new()
        .level(verbosity)
        .format(|out, message, record| {
            #[cfg(not(test))]
            let postfix = "</span>";
            #[cfg(test)]
            let postfix = "";
            if record.level() >= Trace {
                #[cfg(not(test))]
                let prefix = "<span style=\"color: #666\">";
                #[cfg(test)]
                let prefix = "[TRACE] ";
                out.finish(format_args!("{}{}: {}{}", prefix, record.target(), message, postfix))
            } else if record.level() >= Debug {
                #[cfg(not(test))]
                let prefix = "<span style=\"color: #66b\">";
                #[cfg(test)]
                let prefix = "[DEBUG] ";
                out.finish(format_args!("{}{}: {}{}", prefix, record.target(), message, postfix))
            } else if record.level() <= Warn {
                #[cfg(not(test))]
                let prefix = "<span style=\"color: #f99\">";
                #[cfg(test)]
                let prefix = "";
                out.finish(format_args!(
                    "{}[{}] {}: {}{}",
                    prefix,
                    record.level(),
                    record.target(),
                    message,
                    postfix
                ))
            } else {
                out.finish(format_args!("{}", message))
            }
        })
        .chain(Box::new(JsLog) as Box<dyn log::Log>)
        .apply();

    if let Err(e) = result {
        #[cfg(not(test))]
        web_sys::console::error_1(&js_sys::JsString::from(format!("Failed to set up logging: {}.", e)));
        #[cfg(test)]
        println!("Failed to set up logging: {}.", e);
    }
}

#[cfg(test)]
mod tests {
    use log::{info, LevelFilter};
    use crate::logging::{init_logging, take_log};

    #[test]
    fn test_init_logging_twice() {
        init_logging(LevelFilter::Trace);
        init_logging(LevelFilter::Trace);
        info!("Logging works.");
        // Messages are printed directly in tests.
        assert!(take_log().is_empty());
    }
}
