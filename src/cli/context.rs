use helloworld_core::PersonClient;

pub struct Context {
    pub client: PersonClient,
}

impl Context {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: PersonClient::new(endpoint),
        }
    }
}
