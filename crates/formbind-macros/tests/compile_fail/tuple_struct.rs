use formbind::FormRecord;

#[derive(FormRecord)]
struct Point(i32, i32);

fn main() {}
