use super::Strings;

pub(super) const STRINGS: Strings = Strings {
    ask_first_player: "Enter the first player's name:",
    ask_second_player: "Enter the second player's name:",
    name_empty_error: "The name must not be empty.",
    name_whitespace_error: "The name must not contain spaces.",
    name_taken_error: "This name is already taken by the first player.",
    choose_source_word: "Select a word between 8 and 30 letters:",
    size_error: "This word does not meet the size requirement.",
    ask_word: "Enter the word:",
    word_not_in_dictionary: "This word is not in the dictionary.",
    player_move: "It is {name}'s move.",
    player_timed_out: "{name} has run out of time.",
    time_left: "Come up with a word in {seconds} seconds. Type /help for commands.",
    time_is_up: "Time to try is up.",
    input_closed: "Input was closed.",
    reuse_word_error: "This word has already been used.",
    reuse_letters_error: "This word is not suitable, check the number of reused letters.",
    availability_letters_error: "This word is not suitable, check the presence of letters.",
    player_win: "🏆 {name} wins!",
    used_words: "Words used in the round - [ ",
    available_commands: "Available commands:",
    help_show_words: "show the words used in this round",
    help_score: "show the score between the current players",
    help_total_score: "show the total score of all players",
    help_exit: "end the game",
    wrong_command: "Unknown command. Type /help for the list of commands.",
    no_results: "No saved games yet.",
    best_players: "Best players:",
};
