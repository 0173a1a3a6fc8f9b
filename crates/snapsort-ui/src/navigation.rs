//! Navigation service between the capture, library and photo screens.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Capture,
    Library,
    Photo { id: String },
}

pub trait Navigator {
    fn go_to(&mut self, route: Route);

    /// Swap the photo shown by the current single-photo screen without a
    /// full navigation. Pushes a photo screen if none is showing.
    fn replace_photo(&mut self, id: &str);

    fn back(&mut self);

    fn current(&self) -> Option<&Route>;
}

/// Plain back stack. The root route is never popped.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    routes: Vec<Route>,
}

impl NavigationStack {
    pub fn new(root: Route) -> Self {
        Self { routes: vec![root] }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::Capture)
    }
}

impl Navigator for NavigationStack {
    fn go_to(&mut self, route: Route) {
        if self.routes.last() == Some(&route) {
            return;
        }
        log::debug!("navigate to {route:?}");
        self.routes.push(route);
    }

    fn replace_photo(&mut self, id: &str) {
        match self.routes.last_mut() {
            Some(Route::Photo { id: current }) => {
                if current != id {
                    *current = id.to_owned();
                }
            }
            _ => self.routes.push(Route::Photo { id: id.to_owned() }),
        }
    }

    fn back(&mut self) {
        if self.routes.len() > 1 {
            self.routes.pop();
        }
    }

    fn current(&self) -> Option<&Route> {
        self.routes.last()
    }
}
