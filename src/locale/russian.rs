use super::Strings;

pub(super) const STRINGS: Strings = Strings {
    ask_first_player: "Введите имя первого игрока:",
    ask_second_player: "Введите имя второго игрока:",
    name_empty_error: "Имя не может быть пустым.",
    name_whitespace_error: "Имя не должно содержать пробелов.",
    name_taken_error: "Это имя уже занято первым игроком.",
    choose_source_word: "Выберите слово размером от 8 до 30 букв:",
    size_error: "Данное слово не соответствует требованию размеров.",
    ask_word: "Введите слово:",
    word_not_in_dictionary: "Такого слова нет в словаре.",
    player_move: "Ходит {name}.",
    player_timed_out: "Время игрока {name} вышло.",
    time_left: "Придумайте слово за {seconds} секунд. Введите /help для списка команд.",
    time_is_up: "Время на попытку вышло.",
    input_closed: "Ввод закрыт.",
    reuse_word_error: "Данное слово уже было использовано.",
    reuse_letters_error: "Данное слово не подходит, проверьте количество повторно использованных букв.",
    availability_letters_error: "Данное слово не подходит, проверьте наличие букв.",
    player_win: "🏆 Победил {name}!",
    used_words: "Слова раунда - [ ",
    available_commands: "Доступные команды:",
    help_show_words: "показать слова этого раунда",
    help_score: "показать счёт между текущими игроками",
    help_total_score: "показать общий счёт всех игроков",
    help_exit: "завершить игру",
    wrong_command: "Неизвестная команда. Введите /help для списка команд.",
    no_results: "Сохранённых игр пока нет.",
    best_players: "Лучшие игроки:",
};
