/// Generates the per-request option setters shared by all operations.
/// Currently only the timeout can be overridden.
#[macro_export]
macro_rules! add_per_request_options {
    ($type_name:ty) => {
        impl $type_name {
            /// Set the timeout, in milliseconds, for this operation only.
            pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
                self.client.options.timeout_ms = Some(timeout_ms);
                self
            }

            /// Disable the timeout for this operation even if the
            /// [`InfluxClient`](`crate::InfluxClient`) has one configured.
            pub fn no_timeout(mut self) -> Self {
                self.client.options.timeout_ms = None;
                self
            }
        }
    };
}
