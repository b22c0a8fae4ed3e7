/// Encode a few sample camera requests and print the resulting frames.
extern crate camera_ptz_frame;

use camera_ptz_frame::command::PtzCommand;

fn main() {
    let combined_id = "1111111111111111111122222222222222222222";

    // (operation, speed, multiple)
    let requests = [("5", "5", ""), ("11", "5", ""), ("10", "5", "")];

    for (operation, speed, multiple) in requests {
        match PtzCommand::encode(combined_id, operation, speed, multiple) {
            Ok(command) => println!("{command}\n"),
            Err(e) => println!("Encoding failed: {e}\n"),
        }
    }
}
