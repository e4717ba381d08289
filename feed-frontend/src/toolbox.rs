pub mod prelude {
    pub use super::event_listener::{self, AddEventListener};
    pub use super::stored_fn::{RunStoredFnWith, ToEventFn};
}

pub mod stored_fn {
    use leptos::prelude::*;

    pub type StoredFnWith<T, R = ()> = StoredValue<Box<dyn Fn(T) -> R + Sync + Send + 'static>>;

    pub trait RunStoredFnWith<T, R> {
        fn run_with(&self, value: T) -> R;
    }

    impl<T: 'static, R: 'static> RunStoredFnWith<T, R> for StoredFnWith<T, R> {
        fn run_with(&self, value: T) -> R {
            self.with_value(|f| f(value))
        }
    }

    pub trait ToEventFn<E> {
        fn to_fn(self) -> impl Fn(E) + Clone + Sync + Send + 'static;
    }

    impl<E: 'static> ToEventFn<E> for StoredFnWith<E> {
        fn to_fn(self) -> impl Fn(E) + Clone + Sync + Send + 'static {
            move |event: E| self.with_value(|f| f(event))
        }
    }
}

pub mod event_listener {
    use leptos::{ev::EventDescriptor, html::ElementType, prelude::*};
    use tracing::{error, trace, trace_span};
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlElement;

    pub trait AddEventListener {
        fn add_event_listener<T, F>(&self, event: T, callback: F)
        where
            T: EventDescriptor + 'static,
            F: FnMut(<T as EventDescriptor>::EventType) + Clone + 'static;
    }

    impl<E> AddEventListener for NodeRef<E>
    where
        E: ElementType,
        E::Output: JsCast + Clone + 'static + Into<HtmlElement>,
    {
        fn add_event_listener<T, F>(&self, event: T, callback: F)
        where
            T: EventDescriptor + 'static,
            F: FnMut(<T as EventDescriptor>::EventType) + Clone + 'static,
        {
            new(self.clone(), event, callback);
        }
    }

    /// Attaches `f` to the element behind `target` once it is mounted.
    pub fn new<E, T, F>(target: NodeRef<E>, event: T, f: F)
    where
        E: ElementType,
        E::Output: JsCast + Clone + 'static + Into<HtmlElement>,
        T: EventDescriptor + 'static,
        F: FnMut(<T as EventDescriptor>::EventType) + Clone + 'static,
    {
        Effect::new(move || {
            let span = trace_span!("event_listener").entered();
            let Some(node) = target.get() else {
                trace!("target not found");
                return;
            };

            let node: HtmlElement = node.into();

            let closure = Closure::<dyn FnMut(_)>::new(f.clone()).into_js_value();

            if let Err(err) =
                node.add_event_listener_with_callback(&event.name(), closure.as_ref().unchecked_ref())
            {
                error!("failed to add {} listener: {err:?}", event.name());
            }

            span.exit();
        });
    }
}
