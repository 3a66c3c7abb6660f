//! Embedded puzzle list
//!
//! Default puzzles compiled into the binary, uppercase phrases with their
//! categories.

/// Built-in puzzles as (phrase, category) pairs
pub const PUZZLES: &[(&str, &str)] = &[
    ("WHEEL OF FORTUNE", "TV SHOW"),
    ("GOOD LUCK", "PHRASE"),
    ("HAPPY BIRTHDAY", "EVENT"),
    ("A BLESSING IN DISGUISE", "PHRASE"),
    ("BETTER LATE THAN NEVER", "PHRASE"),
    ("PIECE OF CAKE", "PHRASE"),
    ("ONCE IN A BLUE MOON", "PHRASE"),
    ("THE EARLY BIRD CATCHES THE WORM", "PHRASE"),
    ("PRACTICE MAKES PERFECT", "PHRASE"),
    ("EASIER SAID THAN DONE", "PHRASE"),
    ("OUT OF THE FRYING PAN", "PHRASE"),
    ("BREAK A LEG", "PHRASE"),
    ("HIT THE NAIL ON THE HEAD", "PHRASE"),
    ("WILLIAM SHAKESPEARE", "PERSON"),
    ("ALBERT EINSTEIN", "PERSON"),
    ("AMELIA EARHART", "PERSON"),
    ("LEONARDO DA VINCI", "PERSON"),
    ("MARTIN LUTHER KING", "PERSON"),
    ("BENJAMIN FRANKLIN", "PERSON"),
    ("THE GRAND CANYON", "PLACE"),
    ("NIAGARA FALLS", "PLACE"),
    ("THE GREAT WALL OF CHINA", "PLACE"),
    ("TIMES SQUARE", "PLACE"),
    ("THE EIFFEL TOWER", "PLACE"),
    ("GOLDEN GATE BRIDGE", "PLACE"),
    ("MOUNT RUSHMORE", "PLACE"),
    ("ROCKING CHAIR", "THING"),
    ("GRANDFATHER CLOCK", "THING"),
    ("CRYSTAL CHANDELIER", "THING"),
    ("POCKET WATCH", "THING"),
    ("SPIRAL STAIRCASE", "THING"),
    ("MACARONI & CHEESE", "FOOD & DRINK"),
    ("CHOCOLATE CHIP COOKIES", "FOOD & DRINK"),
    ("FRESHLY SQUEEZED ORANGE JUICE", "FOOD & DRINK"),
    ("SPAGHETTI AND MEATBALLS", "FOOD & DRINK"),
    ("NEW YEAR'S EVE", "EVENT"),
    ("FOURTH OF JULY", "EVENT"),
    ("SURPRISE PARTY", "EVENT"),
    ("TRICK-OR-TREATING", "EVENT"),
    ("WALKING THE DOG", "WHAT ARE YOU DOING"),
    ("READING A GOOD BOOK", "WHAT ARE YOU DOING"),
    ("SINGING IN THE SHOWER", "WHAT ARE YOU DOING"),
    ("JUMPING TO CONCLUSIONS", "WHAT ARE YOU DOING"),
    ("DANCING IN THE RAIN", "WHAT ARE YOU DOING"),
];

/// Number of built-in puzzles
pub const PUZZLE_COUNT: usize = PUZZLES.len();
