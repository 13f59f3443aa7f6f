use dioxus::document::{Eval, eval};
use dioxus::prelude::*;
use scrollyteller_engine::{VisibilityConfig, VisibilityController};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Observes one element and streams its intersection ratio back to Rust.
/// Any further message disconnects the observer.
const OBSERVER_JS: &str = r#"
const id = await dioxus.recv();
const threshold = await dioxus.recv();
const element = document.getElementById(id);
if (element) {
    const observer = new IntersectionObserver(
        (entries) => entries.forEach((entry) => dioxus.send(entry.intersectionRatio)),
        { threshold: [0, threshold, 1] }
    );
    observer.observe(element);
    await dioxus.recv();
    observer.disconnect();
}
"#;

const DISCONNECT: &str = "disconnect";

/// Reveal signal for one element, live from mount until drop
#[derive(Clone)]
pub struct VisibilityHandle {
    element_id: String,
    config: VisibilityConfig,
    is_visible: Signal<bool>,
    observer: Rc<RefCell<Option<Eval>>>,
}

impl VisibilityHandle {
    /// DOM id the observed element must carry
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn is_visible(&self) -> bool {
        *self.is_visible.read()
    }

    /// Start observing; call from the element's `onmounted` handler
    pub fn start(&self) {
        if self.observer.borrow().is_some() {
            return;
        }

        let mut observer = eval(OBSERVER_JS);
        if let Err(e) = observer
            .send(self.element_id.clone())
            .and_then(|_| observer.send(self.config.threshold()))
        {
            log::warn!("Could not observe #{}: {e:?}", self.element_id);
            return;
        }
        *self.observer.borrow_mut() = Some(observer.clone());

        let config = self.config;
        let mut is_visible = self.is_visible;
        let slot = Rc::clone(&self.observer);
        spawn(async move {
            let mut controller = VisibilityController::new(config);
            while let Ok(ratio) = observer.recv::<f64>().await {
                let visible = controller.observe(ratio);
                if *is_visible.peek() != visible {
                    is_visible.set(visible);
                }
                if config.once() && visible {
                    release(&slot);
                    break;
                }
            }
        });
    }
}

fn release(observer: &Rc<RefCell<Option<Eval>>>) {
    if let Some(eval) = observer.borrow_mut().take() {
        let _ = eval.send(DISCONNECT);
    }
}

/// Track whether the element carrying `handle.element_id()` is on screen.
///
/// The observer is created when the element mounts and disconnected when
/// the owning component is dropped.
pub fn use_visibility(config: VisibilityConfig) -> VisibilityHandle {
    let element_id = use_hook(|| format!("reveal-{}", Uuid::new_v4().simple()));
    let is_visible = use_signal(|| false);
    let observer = use_hook(|| Rc::new(RefCell::new(None::<Eval>)));

    use_drop({
        let observer = Rc::clone(&observer);
        move || release(&observer)
    });

    VisibilityHandle {
        element_id,
        config,
        is_visible,
        observer,
    }
}
