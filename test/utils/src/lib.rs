pub fn long_message_fixture() -> &'static str {
    return "Hi there! This is a really long line that pushes the boundaries of 50 characters across the screen, resulting in a bubble where the line is wrapped to the next line. Cool right?";
}

pub fn transcript_fixture() -> Vec<&'static str> {
    return vec![
        "How do I book an appointment?",
        "I feel anxious and scared",
        "I want to die",
    ];
}
