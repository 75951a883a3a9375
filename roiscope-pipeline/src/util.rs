/// Short type name for stage logging: the last path segment of
/// `std::any::type_name`, so `roiscope_pipeline::components::Foo`
/// logs as `Foo`.
pub fn short_type_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}
