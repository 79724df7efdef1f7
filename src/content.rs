//! Literal response text.
//!
//! Templates may contain `{owner}`, `{OWNER}`, `{user}` and `{host}`, filled
//! from the configured [`Identity`] by [`fill`]. Other placeholders are
//! replaced by the command that uses the template.

use crate::config::Identity;

pub(crate) fn fill(template: &str, identity: &Identity) -> String {
    template
        .replace("{owner}", &identity.owner)
        .replace("{OWNER}", &identity.owner.to_uppercase())
        .replace("{user}", &identity.user)
        .replace("{host}", &identity.host)
}

/// Names of the simulated files, in listing order.
pub(crate) const FILES: [&str; 9] = [
    "projects/",
    "resume.pdf",
    "skills.txt",
    "contact.json",
    "README.md",
    "portfolio.js",
    ".hidden_secrets",
    ".bashrc",
    ".vimrc",
];

pub(crate) const FORTUNES: [&str; 8] = [
    "The best way to predict the future is to invent it. - Alan Kay",
    "Code is like humor. When you have to explain it, it's bad. - Cory House",
    "First, solve the problem. Then, write the code. - John Johnson",
    "Experience is the name everyone gives to their mistakes. - Oscar Wilde",
    "In order to be irreplaceable, one must always be different. - Coco Chanel",
    "Java is to JavaScript what car is to Carpet. - Chris Heilmann",
    "Knowledge is power. - Francis Bacon",
    "Sometimes it pays to stay in bed on Monday, rather than spending the rest of the week debugging Monday's code. - Dan Salomon",
];

pub(crate) const PROCESSES: [&str; 7] = [
    "  PID TTY          TIME CMD",
    " 1337 pts/0    00:00:01 portfolio",
    " 1338 pts/0    00:00:00 node",
    " 1339 pts/0    00:00:02 react-dev",
    " 1340 pts/0    00:00:00 vite",
    " 1341 pts/0    00:00:01 typescript",
    " 1342 pts/0    00:00:00 bash",
];

pub(crate) const COW_MESSAGE: &str = "Hello from the CLI!";
pub(crate) const TRAIN_FINALE: &str = "🚂 CHOO CHOO! The train has departed! 🚂";
pub(crate) const GOODBYE: &str = "👋 Goodbye! Redirecting to main menu...";
pub(crate) const LOADING: &str = "⏳ Portfolio data is still loading... try again in a moment.";

pub(crate) const HELP: &str = r##"🚀 {owner}'s Interactive Terminal - Help Menu 🚀

[Core Commands]
  about     - Display information about me
  projects  - List my projects
  skills    - List my technical skills
  contact   - Show my contact information
  clear     - Clear the terminal screen
  exit      - Return to the main selection screen

[File System Simulation]
  ls [path] - List files and directories
  cd [dir]  - Change directory
  pwd       - Print working directory
  cat [file]- Display file contents
  mkdir [dir]- Create a directory (simulated)
  cp [s] [d] - Copy a file (simulated)
  mv [s] [d] - Move a file (simulated)
  grep      - Search text patterns (simulated)
  man [cmd] - Show manual for a command

[Fun & Easter Eggs]
  matrix    - Toggle the matrix rain effect
  sl        - Choo choo! An animated train
  cowsay    - Make a cow say something
  fortune   - Get a random fortune cookie
  neofetch  - Display system info with ASCII art
  history   - Show your command history

[System & Info]
  whoami    - Who are you?
  uptime    - Show portfolio uptime
  ps        - Show running processes (simulated)
  date      - Show current date and time
  help      - Show this help message

[Restricted]
  rm, sudo  - These commands are disabled for safety!"##;

pub(crate) const TRAIN_FRAMES: [&str; 2] = [
    r##"                                 (  ) (@@) ( )  (@)  ()    @@    O     @     O     @      O
                            (@@@)
                        (    )
                      (@@@@)
                   (   )

                ====        ________                ___________
            _D _|  |_______/        \__I_I_____===__|_________|
             |(_)---  |   H\________/ |   |        =|___ ___|      _________________
             /     |  |   H  |  |     |   |         ||_| |_||     _|                \_____A
            |      |  |   H  |__--------------------| [___] |   =|                        |
            | ________|___H__/__|_____/[][]~\_______|       |   -|                        |
            |/ |   |-----------I_____I [][] []  D   |=======|____|________________________|_
          __/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__|__________________________|_
           |/-=|___|=    ||    ||    ||    |_____/~\___/          |_D__D__D_|  |_D__D__D_|
            \_/      \O=====O=====O=====O_/      \_/               \_/   \_/    \_/   \_/"##,
    r##"                                                      (@@) (  ) (@)  ( )  @@    O     @     O     @      O
                                                 (@@@@)
                                             (    )
                                           (@@@@)
                                        (   )

                                     ====        ________                ___________
                                 _D _|  |_______/        \__I_I_____===__|_________|
                                  |(_)---  |   H\________/ |   |        =|___ ___|      _________________
                                  /     |  |   H  |  |     |   |         ||_| |_||     _|                \_____A
                                 |      |  |   H  |__--------------------| [___] |   =|                        |
                                 | ________|___H__/__|_____/[][]~\_______|       |   -|                        |
                                 |/ |   |-----------I_____I [][] []  D   |=======|____|________________________|_
                               __/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__|__________________________|_
                                |/-=|___|=    ||    ||    ||    |_____/~\___/          |_D__D__D_|  |_D__D__D_|
                                 \_/      \O=====O=====O=====O_/      \_/               \_/   \_/    \_/   \_/"##,
];

pub(crate) const COW: &str = r##"
 _____________________
< Moo! Welcome to CLI >
 ---------------------
        \   ^__^
         \  (oo)\_______
            (__)\       )\/\
                ||----w |
                ||     ||
"##;

pub(crate) const WELCOME: &str = r##"🚀 Welcome to {owner}'s Interactive Terminal! 🚀
System initialized successfully...
Type 'help' for available commands or 'fortune' for wisdom!"##;

pub(crate) const LS_LONG: &str = r##"total 42
drwxr-xr-x 2 {user} {user} 4096 Dec 15 10:30 📁 projects/
-rw-r--r-- 1 {user} {user} 2048 Dec 15 10:30 📄 resume.pdf
-rw-r--r-- 1 {user} {user}  512 Dec 15 11:45 📝 skills.txt
-rw-r--r-- 1 {user} {user}  256 Dec 15 08:20 📋 contact.json
-rw-r--r-- 1 {user} {user} 1024 Dec 15 12:00 📖 README.md
-rw-r--r-- 1 {user} {user} 3072 Dec 15 14:30 ⚡ portfolio.js
-rw------- 1 {user} {user}   42 Dec 15 00:00 🔒 .hidden_secrets
-rw-r--r-- 1 {user} {user}  128 Dec 15 09:00 ⚙️  .bashrc
-rw-r--r-- 1 {user} {user}   64 Dec 15 09:00 📝 .vimrc"##;

pub(crate) const LS_SHORT: &str = r##"📁 projects/     📄 resume.pdf      📝 skills.txt
📋 contact.json  📖 README.md       ⚡ portfolio.js
🔒 .hidden_secrets  ⚙️ .bashrc     📝 .vimrc"##;

pub(crate) const RM_RECURSIVE: &str = r##"🚨🚨🚨 DANGER WILL ROBINSON! 🚨🚨🚨
💥 rm -rf DETECTED! SHIELDS UP! 💥
🛡️ This command has been BLOCKED! 🛡️
🤖 I'm not letting you nuke my portfolio! 
😅 Nice try though, you sneaky hacker!
🔒 Security level: MAXIMUM PARANOIA"##;

pub(crate) const RM_PLAIN: &str = r##"🚫 rm: operation not permitted
🎭 This is a demo portfolio, not a real filesystem!
💡 Try 'help' for commands that actually work!"##;

pub(crate) const SUDO: &str = r##"🔐🔐🔐 SUDO DETECTED! 🔐🔐🔐
👑 Trying to become root, eh?
🚫 ACCESS DENIED! 🚫
🤡 You think I'd give you admin rights?
😂 This portfolio has trust issues!
🎪 Welcome to the circus of broken dreams!
💀 sudo: {user} is not in the sudoers file. This incident will be reported."##;

pub(crate) const README: &str = r##"📖 PORTFOLIO README 📖

# 🚀 {owner}'s Interactive Portfolio

Welcome to my multi-dimensional portfolio experience!

## 🎯 Available Views:
- 🖥️ CLI Terminal (you are here!)
- 💼 Modern Portfolio

## 🎮 Pro Tips:
- Type 'help' for all available commands
- Try 'fortune' for random wisdom
- Use 'sl' for a fun surprise!
- 'matrix' toggles the Matrix effect

## 🔥 Easter Eggs:
Hidden throughout the terminal... can you find them all?

---
Built with ❤️ and lots of ☕"##;

pub(crate) const HIDDEN_SECRETS: &str = r##"🤫🤫🤫 SECRET UNLOCKED! 🤫🤫🤫
🎉 CONGRATULATIONS! You found the hidden file! 🎉
🏆 Achievement Unlocked: "Curious Explorer"
✨ Here's your reward: I absolutely LOVE building cool, interactive stuff!
🚀 Fun fact: This entire terminal is built in React!
🎨 Another secret: The Matrix effect is pure Canvas magic!
🤓 You're clearly a fellow developer with great taste!"##;

pub(crate) const BASHRC: &str = r##"# 🐚 {owner}'s Enhanced .bashrc 🐚
# Setting a fancy prompt
export PS1="🔥 \[\033[01;32m\]\u@{host}\[\033[00m\]:\[\033[01;34m\]\w\[\033[00m\]$ "

# Aliases for the modern developer
alias ll='ls -alF'
alias la='ls -A'
alias please='sudo' # For polite people
alias shrug='echo "¯\_(ツ)_/¯"'
alias gtfo='exit'

# Function to greet the user
welcome() {
  echo "🚀 Welcome to the terminal, master! 🚀"
}

# Make life colorful
export CLICOLOR=1
export LSCOLORS=GxFxCxDxBxegedabagaced

# Run on startup
fortune | cowsay"##;

pub(crate) const VIMRC: &str = r##"""""""""""""""""""""""""""""""""""""""
" {owner}'s Legendary .vimrc         "
" (Guaranteed to confuse everyone) "
""""""""""""""""""""""""""""""""""""""
set nocompatible " Be modern
syntax on        " Make it pretty

" The ultimate question: how to exit?
" Here are some hints... or are they traps?
nnoremap <leader>q :q!<CR> "The easy way out"
nnoremap :q :echo "Not that easy!"<CR>
inoremap <esc> <esc>:echo "You are trapped forever!"<CR>

" Remap 'leader' key to spacebar
let mapleader = " "

" Super-powered save command
nnoremap <leader>w :w !sudo tee % > /dev/null<CR>

" Move lines up and down with ease
nnoremap <A-j> :m .+1<CR>==
nnoremap <A-k> :m .-2<CR>==

" Turn search highlighting on/off with a toggle
nnoremap <leader>/ :set hlsearch!<CR>

set number " Show line numbers, like a pro
set relativenumber " ...and relative numbers, for extra confusion
set mouse=a " Enable mouse support, because why not?"##;

pub(crate) const MAN_PAGE: &str = r##"📚 MANUAL PAGE FOR {COMMAND} 📚

NAME
    {command} - interactive portfolio command

DESCRIPTION
    This is {owner}'s demo portfolio terminal.
    Commands are simulated for demonstration purposes.
    
EXAMPLES
    Try different commands and explore!
    
SEE ALSO
    help(1), about(1), projects(1)
    
AUTHOR
    Built with ❤️ by {owner}
    
💡 Type 'help' to see all available portfolio commands."##;

pub(crate) const WHOAMI: &str = r##"🤔 WHO AM I? 🤔
👤 You are: A curious visitor
🌟 Status: Exploring {owner}'s portfolio
🎯 Mission: Discover awesome projects
🔥 Level: Hacker (for using the CLI!)"##;

pub(crate) const UPTIME: &str = r##"⏰ SYSTEM UPTIME ⏰
🚀 Portfolio has been running for: {minutes} minutes
💪 Load average: 0.42, 0.69, 1.33
🔋 Status: Running smoothly!"##;

pub(crate) const NEOFETCH: &str = r##"
    'c.          {user}@{host}
  ,xNMM.          ------------------
.OMMMMo           OS: Interactive Web Terminal
OMMM0,            Host: Browser (probably Chrome/Firefox)
,MMMM'            Kernel: JavaScript (V8/SpiderMonkey)
.MMMM.            Uptime: {minutes} minutes
 :MMM'            Packages: 42 (npm)
  .MMM.           Shell: zsh (simulated)
   ,MMM.          Resolution: Your screen size
    :MMM.         Terminal: This React Component
     .MMM.        CPU: Your CPU (working hard!)
      ,MMM.       GPU: Your GPU (rendering these pixels!)
       .MMM.      Memory: A few MBs of your RAM
        .MMM.
         ,MMM.
          .MMM.
           ,MMM.
            :MMM:
             :MMM:
              :MMM:
"##;
