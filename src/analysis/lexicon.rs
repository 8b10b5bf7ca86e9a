//! Sentiment lexicon and modifier word lists
//!
//! Valences are on the usual -4..+4 scale of VADER-style lexicons.

/// Word valences, mean human ratings on a -4 (most negative) to +4 scale
pub const VALENCES: &[(&str, f64)] = &[
    ("abandon", -1.9),
    ("abandoned", -2.0),
    ("abhor", -2.0),
    ("abhorrent", -3.1),
    ("ability", 1.2),
    ("able", 1.5),
    ("abominable", -2.5),
    ("absurd", -1.3),
    ("abundance", 1.3),
    ("abundant", 1.2),
    ("abuse", -3.2),
    ("abusive", -3.2),
    ("accept", 1.6),
    ("accepted", 1.1),
    ("accident", -2.1),
    ("accomplish", 1.8),
    ("accomplished", 1.9),
    ("accusation", -1.0),
    ("accuse", -1.8),
    ("accused", -1.2),
    ("ache", -1.6),
    ("achieve", 1.9),
    ("achievement", 2.1),
    ("aching", -2.2),
    ("acquitted", 1.0),
    ("admiration", 2.6),
    ("admire", 2.1),
    ("admired", 2.3),
    ("adorable", 2.2),
    ("adore", 2.6),
    ("adored", 2.9),
    ("advantage", 1.0),
    ("adventure", 1.3),
    ("affection", 2.4),
    ("affectionate", 1.9),
    ("afraid", -2.2),
    ("aggravate", -2.5),
    ("aggravated", -1.9),
    ("aggressive", -0.6),
    ("agony", -1.8),
    ("agree", 1.5),
    ("agreeable", 1.8),
    ("alarm", -1.4),
    ("alarmed", -1.4),
    ("alert", 1.2),
    ("alienated", -1.2),
    ("alive", 1.6),
    ("alone", -1.0),
    ("amaze", 2.5),
    ("amazed", 2.2),
    ("amazing", 2.8),
    ("ambitious", 1.1),
    ("amuse", 1.7),
    ("amused", 1.8),
    ("amusing", 1.6),
    ("anger", -2.7),
    ("angry", -2.3),
    ("anguish", -2.9),
    ("annoy", -1.9),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("antagonistic", -1.9),
    ("anxiety", -0.7),
    ("anxious", -1.0),
    ("apathetic", -1.2),
    ("apologize", -0.3),
    ("appalled", -2.0),
    ("appalling", -1.5),
    ("appealing", 2.1),
    ("applause", 1.8),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("appreciation", 2.3),
    ("approval", 2.1),
    ("approve", 1.7),
    ("argue", -1.4),
    ("arrogant", -2.1),
    ("ashamed", -2.1),
    ("assault", -2.8),
    ("astonished", 1.6),
    ("attack", -2.1),
    ("attractive", 1.9),
    ("avoid", -1.2),
    ("awarded", 1.7),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("awkward", -0.6),
    ("bad", -2.5),
    ("badly", -2.1),
    ("ban", -2.6),
    ("bankrupt", -2.6),
    ("beautiful", 2.9),
    ("benefit", 2.0),
    ("best", 3.2),
    ("betray", -3.2),
    ("betrayed", -3.0),
    ("better", 1.9),
    ("bias", -0.4),
    ("bitter", -1.8),
    ("bitterness", -1.5),
    ("bizarre", -0.1),
    ("blame", -1.4),
    ("bless", 1.8),
    ("blessed", 2.9),
    ("blessing", 2.2),
    ("bliss", 2.7),
    ("blissful", 2.9),
    ("blocked", -1.1),
    ("bold", 1.6),
    ("bonus", 2.5),
    ("boost", 1.7),
    ("bore", -1.0),
    ("bored", -1.1),
    ("boredom", -1.3),
    ("boring", -1.3),
    ("bother", -1.4),
    ("bothered", -1.2),
    ("brave", 2.4),
    ("bravery", 2.4),
    ("breakthrough", 1.6),
    ("bright", 1.9),
    ("brilliance", 2.9),
    ("brilliant", 2.8),
    ("broke", -1.8),
    ("broken", -2.1),
    ("brutal", -3.1),
    ("bully", -2.2),
    ("burden", -1.9),
    ("calamity", -3.4),
    ("calm", 1.3),
    ("capable", 1.6),
    ("care", 2.2),
    ("carefree", 1.7),
    ("careful", 0.6),
    ("careless", -1.5),
    ("caring", 2.2),
    ("catastrophe", -3.4),
    ("catastrophic", -2.2),
    ("celebrate", 2.7),
    ("celebration", 2.7),
    ("certain", 1.1),
    ("challenge", 0.3),
    ("champion", 2.9),
    ("chance", 1.0),
    ("chaos", -2.7),
    ("charm", 1.7),
    ("charming", 2.8),
    ("cheat", -2.0),
    ("cheated", -1.9),
    ("cheer", 2.3),
    ("cheerful", 2.5),
    ("cheerfully", 2.3),
    ("cherish", 1.6),
    ("clarity", 1.8),
    ("clash", -1.5),
    ("clean", 1.7),
    ("clever", 2.0),
    ("clumsy", -1.4),
    ("collapse", -2.2),
    ("comedy", 1.5),
    ("comfort", 1.5),
    ("comfortable", 2.3),
    ("comfortably", 1.7),
    ("commitment", 1.6),
    ("compassion", 2.0),
    ("compassionate", 1.6),
    ("competent", 1.3),
    ("complain", -1.5),
    ("complaint", -1.2),
    ("condemn", -1.6),
    ("confident", 2.2),
    ("conflict", -1.3),
    ("confused", -1.3),
    ("confusing", -0.9),
    ("confusion", -1.2),
    ("congrats", 2.4),
    ("congratulate", 2.2),
    ("congratulations", 2.9),
    ("contempt", -2.8),
    ("content", 1.5),
    ("convince", 1.0),
    ("cool", 1.3),
    ("corrupt", -3.0),
    ("courage", 2.2),
    ("courageous", 2.4),
    ("coward", -2.0),
    ("cowardly", -1.6),
    ("cramped", -1.2),
    ("crash", -1.7),
    ("crazy", -1.4),
    ("creative", 1.9),
    ("credible", 1.2),
    ("creepy", -2.5),
    ("cried", -1.6),
    ("crime", -2.5),
    ("criminal", -2.4),
    ("crisis", -3.1),
    ("crisp", 0.8),
    ("critical", -1.3),
    ("cruel", -2.8),
    ("crushed", -1.8),
    ("cry", -2.1),
    ("curse", -2.5),
    ("cursed", -2.4),
    ("cute", 2.0),
    ("cynical", -1.6),
    ("damage", -2.2),
    ("damaged", -1.9),
    ("damn", -1.7),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("darkness", -1.0),
    ("dead", -3.3),
    ("deadly", -2.4),
    ("dear", 1.6),
    ("death", -2.9),
    ("deceit", -2.0),
    ("deceive", -1.7),
    ("deceived", -1.9),
    ("decline", -1.1),
    ("defeat", -2.0),
    ("defeated", -2.1),
    ("defect", -1.4),
    ("defective", -1.9),
    ("defend", 0.8),
    ("deficit", -1.7),
    ("degrade", -1.9),
    ("delay", -1.3),
    ("delayed", -0.9),
    ("delicate", 0.2),
    ("delicious", 2.7),
    ("delight", 2.9),
    ("delighted", 2.3),
    ("delightful", 2.9),
    ("denied", -1.6),
    ("deny", -1.4),
    ("depressed", -2.3),
    ("depressing", -1.6),
    ("depression", -2.7),
    ("deprived", -2.1),
    ("desire", 1.7),
    ("despair", -2.3),
    ("desperate", -1.3),
    ("despise", -1.4),
    ("destroy", -2.5),
    ("destroyed", -2.6),
    ("destruction", -2.7),
    ("destructive", -3.0),
    ("determined", 1.4),
    ("devastate", -3.1),
    ("devastated", -1.5),
    ("devastating", -2.7),
    ("devoted", 1.7),
    ("difficult", -1.5),
    ("dignity", 1.7),
    ("dirty", -1.9),
    ("disabled", -2.1),
    ("disagree", -1.6),
    ("disappoint", -1.7),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("disaster", -3.1),
    ("discomfort", -1.8),
    ("discouraged", -1.7),
    ("disgrace", -2.2),
    ("disgraceful", -2.2),
    ("disgust", -2.9),
    ("disgusted", -2.4),
    ("disgusting", -2.4),
    ("dishonest", -2.7),
    ("dislike", -1.6),
    ("dismal", -3.0),
    ("dismay", -1.8),
    ("disorder", -1.7),
    ("disrespect", -1.8),
    ("dissatisfied", -1.6),
    ("distress", -2.4),
    ("distressed", -1.8),
    ("disturbed", -1.6),
    ("disturbing", -2.3),
    ("divine", 2.6),
    ("dominate", -0.5),
    ("doom", -1.7),
    ("doomed", -3.2),
    ("doubt", -1.5),
    ("drag", -0.9),
    ("dread", -2.0),
    ("dreadful", -1.9),
    ("dream", 1.0),
    ("dreary", -1.4),
    ("dull", -1.7),
    ("dumb", -2.3),
    ("dump", -1.6),
    ("eager", 1.5),
    ("eagerly", 1.6),
    ("ease", 1.5),
    ("easily", 1.4),
    ("easy", 1.9),
    ("ecstatic", 2.3),
    ("effective", 2.1),
    ("efficient", 1.8),
    ("effortless", 1.4),
    ("elegant", 2.1),
    ("embarrassed", -1.5),
    ("embarrassing", -1.6),
    ("embrace", 1.3),
    ("emergency", -1.6),
    ("empathy", 1.7),
    ("empty", -0.8),
    ("encourage", 2.3),
    ("encouraged", 1.5),
    ("encouraging", 2.4),
    ("endorse", 1.3),
    ("enemy", -2.5),
    ("energetic", 1.9),
    ("energy", 1.1),
    ("engaging", 1.4),
    ("enjoy", 2.2),
    ("enjoyable", 1.9),
    ("enjoyed", 2.3),
    ("enjoying", 2.4),
    ("enjoyment", 2.6),
    ("enlighten", 2.3),
    ("enraged", -2.8),
    ("entertaining", 1.3),
    ("enthusiasm", 1.9),
    ("enthusiastic", 1.9),
    ("envy", -1.1),
    ("error", -1.7),
    ("euphoric", 3.2),
    ("evil", -3.4),
    ("exaggerate", -0.6),
    ("exasperated", -1.8),
    ("excellence", 3.1),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("excitement", 2.2),
    ("exciting", 2.2),
    ("exhausted", -1.5),
    ("expensive", -0.7),
    ("exploit", -0.4),
    ("exposed", -0.5),
    ("fabulous", 2.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failing", -2.3),
    ("failure", -2.3),
    ("fair", 1.3),
    ("faith", 1.8),
    ("faithful", 1.9),
    ("fake", -2.1),
    ("fame", 1.9),
    ("famous", 1.3),
    ("fancy", 1.3),
    ("fantastic", 2.6),
    ("fatal", -2.5),
    ("fatigue", -1.0),
    ("fault", -1.7),
    ("favor", 1.7),
    ("favorite", 2.0),
    ("fear", -2.2),
    ("fearful", -2.2),
    ("fearless", 1.9),
    ("festive", 2.0),
    ("fight", -1.6),
    ("fighting", -1.5),
    ("filthy", -3.0),
    ("fine", 0.8),
    ("fired", -2.6),
    ("flawed", -1.7),
    ("flawless", 2.3),
    ("flexible", 0.9),
    ("flop", -1.4),
    ("fond", 1.9),
    ("fool", -1.9),
    ("foolish", -1.1),
    ("forbidden", -1.8),
    ("forgive", 1.1),
    ("fortunate", 1.9),
    ("fraud", -2.8),
    ("free", 2.3),
    ("freedom", 3.2),
    ("fresh", 1.3),
    ("friend", 2.2),
    ("friendly", 2.2),
    ("frightened", -1.9),
    ("frightening", -2.2),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("frustration", -2.1),
    ("fulfill", 1.9),
    ("fulfilled", 1.8),
    ("fun", 2.3),
    ("funny", 1.9),
    ("fury", -2.7),
    ("gain", 2.4),
    ("generous", 2.3),
    ("genius", 1.9),
    ("gentle", 1.9),
    ("gift", 1.9),
    ("giggle", 1.5),
    ("glad", 2.0),
    ("gloom", -2.6),
    ("gloomy", -0.6),
    ("glorious", 3.2),
    ("glory", 2.3),
    ("good", 1.9),
    ("goodness", 2.0),
    ("gorgeous", 3.0),
    ("grace", 1.8),
    ("graceful", 2.0),
    ("gracious", 2.6),
    ("grateful", 2.0),
    ("gratitude", 2.3),
    ("great", 3.1),
    ("greed", -1.7),
    ("greedy", -1.3),
    ("grief", -2.2),
    ("grim", -2.7),
    ("gross", -2.1),
    ("growth", 1.6),
    ("grumpy", -2.2),
    ("guilt", -1.1),
    ("guilty", -1.8),
    ("happiness", 2.6),
    ("happy", 2.7),
    ("harassment", -2.5),
    ("hard", -0.4),
    ("hardship", -1.8),
    ("harm", -2.5),
    ("harmful", -2.3),
    ("harmony", 1.7),
    ("harsh", -1.9),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hatred", -3.2),
    ("haunted", -1.7),
    ("healthy", 1.7),
    ("heartbreak", -2.7),
    ("heartbroken", -3.3),
    ("heartfelt", 2.5),
    ("heaven", 2.3),
    ("heavenly", 3.0),
    ("help", 1.7),
    ("helpful", 1.8),
    ("helpless", -2.0),
    ("hero", 2.6),
    ("hilarious", 1.7),
    ("honest", 2.3),
    ("honor", 2.2),
    ("honored", 2.8),
    ("hooray", 2.3),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("hopeless", -2.0),
    ("horrible", -2.5),
    ("horrific", -3.4),
    ("horror", -2.7),
    ("hostile", -2.2),
    ("hostility", -2.5),
    ("hug", 2.1),
    ("humiliated", -1.9),
    ("humor", 1.1),
    ("hungry", -0.1),
    ("hurt", -2.4),
    ("hurting", -1.5),
    ("hysterical", -0.1),
    ("ideal", 2.4),
    ("idiot", -2.3),
    ("ignorant", -1.1),
    ("ignore", -1.5),
    ("ignored", -1.3),
    ("ill", -1.8),
    ("illegal", -2.6),
    ("imbecile", -2.5),
    ("impatient", -1.2),
    ("impress", 1.9),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("inability", -1.7),
    ("inadequate", -1.7),
    ("incompetent", -2.1),
    ("inconvenience", -1.5),
    ("incredible", 3.4),
    ("inferior", -1.7),
    ("infuriated", -3.0),
    ("injured", -1.7),
    ("injury", -2.5),
    ("injustice", -2.7),
    ("innocent", 1.4),
    ("insane", -1.7),
    ("insecure", -1.8),
    ("inspire", 2.7),
    ("insult", -2.3),
    ("insulted", -2.3),
    ("insulting", -2.2),
    ("intelligent", 2.0),
    ("interested", 1.7),
    ("interesting", 1.7),
    ("intimidated", -1.9),
    ("irresponsible", -1.9),
    ("irritated", -2.0),
    ("irritating", -2.0),
    ("isolated", -1.3),
    ("jealous", -2.0),
    ("jerk", -2.6),
    ("joke", 1.2),
    ("joy", 2.8),
    ("joyful", 2.9),
    ("joyous", 3.1),
    ("jubilant", 2.8),
    ("justice", 2.4),
    ("kill", -3.7),
    ("kind", 2.4),
    ("kindness", 2.0),
    ("kiss", 1.8),
    ("lack", -1.3),
    ("lame", -1.8),
    ("laugh", 2.6),
    ("laughing", 2.2),
    ("laughter", 2.2),
    ("lazy", -1.5),
    ("liar", -2.8),
    ("liberty", 2.4),
    ("lied", -1.6),
    ("lies", -1.8),
    ("likable", 2.0),
    ("like", 1.5),
    ("liked", 1.8),
    ("loathe", -2.2),
    ("lol", 1.8),
    ("loneliness", -1.8),
    ("lonely", -1.5),
    ("longing", -0.1),
    ("lose", -1.3),
    ("loser", -2.4),
    ("losing", -1.6),
    ("loss", -1.3),
    ("lost", -1.3),
    ("lousy", -2.5),
    ("lovable", 3.0),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loving", 2.9),
    ("loyal", 2.1),
    ("luck", 2.0),
    ("luckily", 2.3),
    ("lucky", 1.8),
    ("luxury", 2.0),
    ("mad", -2.2),
    ("magnificent", 2.9),
    ("majestic", 2.9),
    ("marvelous", 2.9),
    ("masterpiece", 3.1),
    ("meaningful", 1.3),
    ("meaningless", -1.9),
    ("mediocre", -0.3),
    ("melancholy", -1.9),
    ("merciful", 1.5),
    ("mercy", 1.5),
    ("merry", 2.5),
    ("mess", -1.5),
    ("miserable", -2.2),
    ("misery", -2.7),
    ("misfortune", -1.6),
    ("misleading", -1.7),
    ("miss", -0.6),
    ("mistake", -1.4),
    ("misunderstood", -1.1),
    ("moan", -0.6),
    ("mock", -1.8),
    ("mourn", -1.9),
    ("murder", -3.7),
    ("naive", -1.1),
    ("nasty", -2.6),
    ("negative", -2.7),
    ("neglect", -2.0),
    ("neglected", -2.4),
    ("nervous", -1.1),
    ("nice", 1.8),
    ("nightmare", -1.9),
    ("noble", 2.0),
    ("nonsense", -1.7),
    ("numb", -1.4),
    ("obnoxious", -2.0),
    ("obsolete", -1.2),
    ("offend", -1.2),
    ("offended", -1.0),
    ("offensive", -2.2),
    ("ok", 1.2),
    ("okay", 0.9),
    ("opportunity", 1.8),
    ("oppressed", -2.1),
    ("optimism", 2.5),
    ("optimistic", 1.3),
    ("outrage", -2.3),
    ("outraged", -2.5),
    ("outstanding", 3.0),
    ("overwhelmed", -0.4),
    ("pain", -2.3),
    ("painful", -1.9),
    ("painless", 1.2),
    ("panic", -2.3),
    ("paradise", 3.2),
    ("paranoid", -1.0),
    ("passion", 2.0),
    ("passionate", 2.4),
    ("pathetic", -2.7),
    ("peace", 2.5),
    ("peaceful", 2.2),
    ("perfect", 2.7),
    ("pessimistic", -1.5),
    ("phony", -2.2),
    ("pity", -1.2),
    ("playful", 1.9),
    ("pleasant", 2.3),
    ("please", 1.3),
    ("pleased", 1.9),
    ("pleasure", 2.7),
    ("poor", -2.1),
    ("popular", 1.8),
    ("positive", 2.6),
    ("poverty", -2.3),
    ("powerful", 1.8),
    ("praise", 2.6),
    ("precious", 2.7),
    ("prejudice", -2.3),
    ("prestigious", 2.2),
    ("pretty", 2.2),
    ("pride", 1.4),
    ("prison", -2.3),
    ("privileged", 1.9),
    ("problem", -1.7),
    ("profit", 1.9),
    ("progress", 1.8),
    ("prosperous", 2.1),
    ("protect", 1.3),
    ("protected", 1.9),
    ("proud", 2.1),
    ("proudly", 1.8),
    ("punish", -2.4),
    ("quarrel", -1.5),
    ("radiant", 2.1),
    ("rage", -2.6),
    ("rape", -3.7),
    ("reassure", 1.4),
    ("reckless", -1.8),
    ("recommend", 1.5),
    ("refreshing", 2.2),
    ("refuse", -1.2),
    ("regret", -1.8),
    ("regretful", -1.9),
    ("reject", -1.7),
    ("rejected", -2.6),
    ("rejoice", 1.9),
    ("relaxed", 2.2),
    ("relaxing", 2.2),
    ("reliable", 1.9),
    ("relief", 2.1),
    ("relieved", 1.6),
    ("remarkable", 2.5),
    ("remorse", -1.1),
    ("resent", -0.7),
    ("resentful", -2.1),
    ("respect", 2.1),
    ("restless", -1.1),
    ("revenge", -2.4),
    ("reward", 2.1),
    ("rich", 2.6),
    ("ridiculous", -1.5),
    ("rigged", -1.5),
    ("risk", -1.1),
    ("robbed", -2.1),
    ("romantic", 1.7),
    ("rotten", -2.3),
    ("rubbish", -1.8),
    ("rude", -2.0),
    ("ruin", -2.8),
    ("sad", -2.1),
    ("sadly", -1.9),
    ("sadness", -1.9),
    ("safe", 1.9),
    ("safety", 1.8),
    ("satisfaction", 1.9),
    ("satisfied", 1.8),
    ("satisfy", 2.0),
    ("satisfying", 2.0),
    ("savage", -2.0),
    ("scam", -2.7),
    ("scandal", -1.9),
    ("scared", -1.9),
    ("scary", -2.2),
    ("screwed", -2.2),
    ("secure", 1.4),
    ("selfish", -2.1),
    ("sentimental", 1.3),
    ("serene", 2.0),
    ("severe", -1.6),
    ("shame", -2.1),
    ("shameful", -2.2),
    ("shit", -2.6),
    ("shock", -1.6),
    ("shocked", -1.3),
    ("shocking", -1.7),
    ("sick", -2.3),
    ("silly", -0.1),
    ("sincere", 1.7),
    ("sinful", -2.6),
    ("skeptical", -0.8),
    ("smart", 1.7),
    ("smile", 1.5),
    ("smiling", 2.3),
    ("smooth", 0.5),
    ("sob", -1.0),
    ("solid", 1.1),
    ("sorrow", -2.4),
    ("sorry", -0.3),
    ("special", 1.7),
    ("splendid", 2.8),
    ("stable", 1.2),
    ("stolen", -2.2),
    ("strength", 2.2),
    ("stress", -1.8),
    ("stressed", -1.4),
    ("stressful", -2.3),
    ("strong", 2.3),
    ("struggle", -1.3),
    ("stuck", -1.0),
    ("stunning", 1.6),
    ("stupid", -2.4),
    ("succeed", 2.2),
    ("success", 2.7),
    ("successful", 2.8),
    ("suffer", -2.5),
    ("suffering", -2.1),
    ("suicide", -3.5),
    ("sunshine", 2.2),
    ("super", 2.9),
    ("superb", 3.1),
    ("superior", 2.5),
    ("support", 1.7),
    ("supportive", 1.2),
    ("sure", 1.3),
    ("surprise", 1.1),
    ("suspicious", -1.5),
    ("sweet", 2.0),
    ("sympathy", 0.3),
    ("talent", 1.8),
    ("talented", 2.3),
    ("tender", 0.6),
    ("tense", -1.4),
    ("terrible", -2.1),
    ("terrific", 3.3),
    ("terrified", -3.0),
    ("terror", -3.4),
    ("thank", 1.5),
    ("thankful", 2.7),
    ("thanks", 1.9),
    ("thoughtful", 1.6),
    ("threat", -2.4),
    ("thrilled", 1.9),
    ("thrilling", 2.1),
    ("tired", -1.9),
    ("torture", -2.9),
    ("toxic", -2.5),
    ("tragedy", -3.4),
    ("tragic", -3.3),
    ("tranquil", 0.2),
    ("trauma", -2.8),
    ("treasure", 1.2),
    ("triumph", 2.1),
    ("trouble", -1.7),
    ("troubled", -2.0),
    ("true", 2.1),
    ("trust", 2.3),
    ("trusted", 2.1),
    ("trustworthy", 2.6),
    ("truth", 1.3),
    ("ugly", -2.3),
    ("unacceptable", -2.0),
    ("unbelievable", 0.9),
    ("uncertain", -1.2),
    ("uncomfortable", -1.6),
    ("unfair", -2.1),
    ("unfortunate", -2.0),
    ("unfortunately", -1.4),
    ("unhappy", -1.8),
    ("unhealthy", -2.4),
    ("unpleasant", -2.1),
    ("unsafe", -2.5),
    ("unstable", -1.5),
    ("unsure", -1.0),
    ("unwanted", -0.9),
    ("upbeat", 0.8),
    ("upset", -1.6),
    ("useful", 1.9),
    ("useless", -1.8),
    ("vain", -1.8),
    ("valuable", 2.1),
    ("vicious", -1.5),
    ("victim", -1.1),
    ("victory", 2.9),
    ("vile", -3.1),
    ("violence", -3.1),
    ("violent", -2.9),
    ("virtue", 1.9),
    ("vulnerable", -0.9),
    ("war", -2.9),
    ("warm", 0.9),
    ("warmth", 2.0),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("weak", -1.9),
    ("weakness", -1.8),
    ("wealth", 2.2),
    ("weary", -1.1),
    ("weird", -0.7),
    ("welcome", 2.0),
    ("whore", -3.3),
    ("wicked", -2.4),
    ("win", 2.8),
    ("winner", 2.8),
    ("winning", 2.4),
    ("wisdom", 2.4),
    ("wise", 1.8),
    ("woe", -1.8),
    ("wonder", 1.0),
    ("wonderful", 2.7),
    ("wonderfully", 2.9),
    ("worn", -1.2),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worrying", -1.4),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -1.9),
    ("worthy", 1.9),
    ("wounded", -2.1),
    ("wow", 2.8),
    ("wrath", -3.4),
    ("wrong", -2.1),
    ("yay", 2.4),
    ("yes", 1.7),
    ("yummy", 2.4),
    ("zealous", 0.5),
];

/// Words that flip the valence of what follows
pub const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont",
    "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "never", "no",
    "nobody", "none", "nope", "nor", "not", "nothing", "nowhere", "oughtnt", "shant",
    "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt", "rarely", "seldom",
    "despite",
];

/// Intensifiers that raise the magnitude of the next sentiment word
pub const BOOSTERS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly",
    "deeply", "enormously", "entirely", "especially", "exceptionally", "extremely",
    "fabulously", "greatly", "highly", "hugely", "incredibly", "intensely", "majorly",
    "more", "most", "particularly", "purely", "quite", "really", "remarkably", "so",
    "substantially", "thoroughly", "totally", "tremendously", "truly", "unbelievably",
    "utterly", "very",
];

/// Dampeners that lower the magnitude of the next sentiment word
pub const DAMPENERS: &[&str] = &[
    "almost", "barely", "hardly", "less", "little", "marginally", "occasionally",
    "partly", "scarcely", "slightly", "somewhat", "sort",
];
