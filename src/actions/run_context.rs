/// Where the investigation writes its lines.
pub trait RunContext {
    fn print(&mut self, line: &str);
}

pub struct StdoutContext;

impl RunContext for StdoutContext {
    fn print(&mut self, line: &str) {
        println!("{}", line);
    }
}
