use acontext_core::task::TaskStatus;

pub fn run() {
    for status in TaskStatus::ALL {
        println!("{}", status);
    }
}
