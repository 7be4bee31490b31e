
mod content_handler_test;
mod json {
    mod reader_test;
}
