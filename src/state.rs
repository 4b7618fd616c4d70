use crate::counter::RequestCounter;

// app's shared state

pub struct AppState {
    pub counter: RequestCounter,
}
