use crate::command::{Builtin, Effect, Fault, Handler, Invocation, Mutation, Output};
use crate::content::{self, fill};
use crate::interpreter::Context;
use crate::portfolio::PortfolioRecord;
use crate::session::{Directory, SessionState};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// The command table. Adding a [`Builtin`] without a handler does not compile.
pub(crate) fn handler(builtin: Builtin) -> Handler {
    match builtin {
        Builtin::Help => Handler::Format(help),
        Builtin::About => Handler::Format(about),
        Builtin::Projects => Handler::Format(projects),
        Builtin::Skills => Handler::Format(skills),
        Builtin::Contact => Handler::Format(contact),
        Builtin::Clear => Handler::Mutate(clear),
        Builtin::Ls => Handler::Format(ls),
        Builtin::Cd => Handler::Mutate(cd),
        Builtin::Pwd => Handler::Format(pwd),
        Builtin::Mkdir => Handler::Format(mkdir),
        Builtin::Rm => Handler::Format(rm),
        Builtin::Sudo => Handler::Format(sudo),
        Builtin::Cp => Handler::Format(cp),
        Builtin::Mv => Handler::Format(mv),
        Builtin::Cat => Handler::Format(cat),
        Builtin::Grep => Handler::Format(grep),
        Builtin::Man => Handler::Format(man),
        Builtin::Matrix => Handler::Mutate(matrix),
        Builtin::Sl => Handler::Animate,
        Builtin::Cowsay => Handler::Format(cowsay),
        Builtin::Fortune => Handler::Format(fortune),
        Builtin::Whoami => Handler::Format(whoami),
        Builtin::Uptime => Handler::Format(uptime),
        Builtin::Ps => Handler::Format(ps),
        Builtin::Date => Handler::Format(date),
        Builtin::History => Handler::Format(history),
        Builtin::Neofetch => Handler::Format(neofetch),
        Builtin::Exit => Handler::Navigate(exit),
    }
}

type Formatted = Result<Output, Fault>;

/// Render from the record, or say it is still loading.
fn with_record(ctx: &Context<'_>, render: impl FnOnce(&PortfolioRecord) -> String) -> Formatted {
    Ok(match ctx.record {
        Some(record) => Output::success(render(record)),
        None => Output::neutral(content::LOADING),
    })
}

fn skills_text(record: &PortfolioRecord) -> String {
    format!("🛠️ MY TECHNICAL SKILLS 🛠️\n\n• {}", record.skills.join("\n• "))
}

fn help(_inv: &Invocation<'_>, ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    Ok(Output::success(fill(content::HELP, ctx.identity)).verbatim())
}

fn about(_inv: &Invocation<'_>, ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    with_record(ctx, |record| {
        format!(
            "📋 ABOUT {} 📋\n\n{}",
            ctx.identity.owner.to_uppercase(),
            record.about
        )
    })
}

fn projects(_inv: &Invocation<'_>, ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    with_record(ctx, |record| {
        let listing = record
            .projects
            .iter()
            .enumerate()
            .map(|(i, p)| {
                format!(
                    "[{}] {}\n    📝 {}\n    🔗 {}\n    🛠️  Tech: {}\n",
                    i + 1,
                    p.name,
                    p.description,
                    p.url,
                    p.tech.join(", ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("🚀 MY AWESOME PROJECTS 🚀\n\n{listing}")
    })
}

fn skills(_inv: &Invocation<'_>, ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    with_record(ctx, skills_text)
}

fn contact(_inv: &Invocation<'_>, ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    with_record(ctx, |record| {
        let c = &record.contact;
        format!(
            "📞 GET IN TOUCH 📞\n\n📧 Email: {}\n🐙 Github: {}\n💼 LinkedIn: {}",
            c.email, c.github, c.linkedin
        )
    })
}

fn clear(
    _inv: &Invocation<'_>,
    _ctx: &Context<'_>,
    _state: &mut SessionState,
) -> Result<Mutation, Fault> {
    Ok(Mutation {
        output: None,
        effect: Effect::ClearTranscript,
    })
}

fn ls(inv: &Invocation<'_>, ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    if inv.has_flag("-l") {
        Ok(Output::success(fill(content::LS_LONG, ctx.identity)).verbatim())
    } else {
        Ok(Output::success(content::LS_SHORT))
    }
}

fn cd(
    inv: &Invocation<'_>,
    ctx: &Context<'_>,
    state: &mut SessionState,
) -> Result<Mutation, Fault> {
    let target = inv.arg(0).unwrap_or("~");
    let text = match target {
        "~" => {
            state.directory = Directory::Home;
            "🏠 Welcome home!"
        }
        t if t == ctx.identity.home() => {
            state.directory = Directory::Home;
            "🏠 Welcome home!"
        }
        "projects" | "projects/" => {
            state.directory = Directory::Projects;
            "📁 Entered projects directory"
        }
        ".." if state.directory != Directory::Home => {
            state.directory = Directory::Home;
            "⬆️ Moved up one directory"
        }
        _ => return Err(Fault::not_found("cd", target)),
    };
    Ok(Mutation::output(Output::success(text)))
}

fn pwd(_inv: &Invocation<'_>, ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    Ok(Output::success(format!("📍 Current location: {}", ctx.cwd())))
}

fn mkdir(inv: &Invocation<'_>, _ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    let dir = inv
        .arg(0)
        .ok_or_else(|| Fault::missing("mkdir", "missing operand"))?;
    Ok(Output::success(format!(
        "✅ mkdir: created directory '{dir}' 📁"
    )))
}

fn rm(inv: &Invocation<'_>, _ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    if inv.has_flag("-rf") || inv.has_flag("-r") {
        Err(Fault::Refused(content::RM_RECURSIVE.to_string()))
    } else {
        Err(Fault::Refused(content::RM_PLAIN.to_string()))
    }
}

fn sudo(_inv: &Invocation<'_>, ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    Err(Fault::Refused(fill(content::SUDO, ctx.identity)))
}

/// Source and destination operands of `cp`/`mv`.
fn two_operands<'a>(
    inv: &Invocation<'a>,
    command: &'static str,
) -> Result<(&'a str, &'a str), Fault> {
    match (inv.arg(0), inv.arg(1)) {
        (Some(src), Some(dst)) => Ok((src, dst)),
        _ => Err(Fault::missing(command, "missing file operand")),
    }
}

fn cp(inv: &Invocation<'_>, _ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    let (src, dst) = two_operands(inv, "cp")?;
    Ok(Output::success(format!("✅ cp: copied '{src}' to '{dst}' 📋")))
}

fn mv(inv: &Invocation<'_>, _ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    let (src, dst) = two_operands(inv, "mv")?;
    Ok(Output::success(format!("✅ mv: moved '{src}' to '{dst}' 🚚")))
}

fn cat(inv: &Invocation<'_>, ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    let file = inv
        .arg(0)
        .ok_or_else(|| Fault::missing("cat", "missing file operand"))?;
    match file {
        "resume.pdf" => Err(Fault::BinaryFile(file.to_string())),
        "skills.txt" => with_record(ctx, skills_text),
        "contact.json" => with_record(ctx, |record| {
            let json = serde_json::to_string_pretty(&record.contact)
                .unwrap_or_else(|_| "{}".to_string());
            format!("📋 CONTACT INFORMATION 📋\n\n{json}")
        }),
        "README.md" => Ok(Output::success(fill(content::README, ctx.identity))),
        ".hidden_secrets" => Ok(Output::success(content::HIDDEN_SECRETS)),
        ".bashrc" => Ok(Output::success(fill(content::BASHRC, ctx.identity))),
        ".vimrc" => Ok(Output::success(fill(content::VIMRC, ctx.identity))),
        _ => Err(Fault::not_found("cat", file)),
    }
}

fn grep(inv: &Invocation<'_>, _ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    let pattern = inv
        .arg(0)
        .ok_or_else(|| Fault::missing("grep", "missing pattern"))?;
    let file = inv
        .arg(1)
        .ok_or_else(|| Fault::missing("grep", "missing file operand"))?;
    Ok(Output::success(format!(
        "🔍 grep: searching for '{pattern}' in {file}...\n\
         📝 Match found on line 42: \"The answer to everything is {pattern}\"\n\
         ✅ Search completed successfully!"
    )))
}

fn man(inv: &Invocation<'_>, ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    let command = inv
        .arg(0)
        .ok_or_else(|| Fault::missing("man", "missing command"))?;
    let page = fill(content::MAN_PAGE, ctx.identity)
        .replace("{COMMAND}", &command.to_uppercase())
        .replace("{command}", command);
    Ok(Output::success(page))
}

fn matrix(
    _inv: &Invocation<'_>,
    _ctx: &Context<'_>,
    state: &mut SessionState,
) -> Result<Mutation, Fault> {
    state.matrix_active = !state.matrix_active;
    let text = if state.matrix_active {
        "🔴💊 ENTERING THE MATRIX 💊🔴\n🌊 Reality is dissolving...\nMatrix effect ACTIVATED!"
    } else {
        "🔴💊 EXITING THE MATRIX 💊🔴\n👁️ Welcome back to reality\nMatrix effect DEACTIVATED!"
    };
    Ok(Mutation::output(Output::success(text)))
}

fn cowsay(inv: &Invocation<'_>, _ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    let message = if inv.args.is_empty() {
        content::COW_MESSAGE.to_string()
    } else {
        inv.args.join(" ")
    };
    let width = message.chars().count() + 2;
    let cow = content::COW.lines().skip(4).collect::<Vec<_>>().join("\n");
    Ok(Output::success(format!(
        "\n {}\n< {} >\n {}\n{}\n",
        "_".repeat(width),
        message,
        "-".repeat(width),
        cow
    ))
    .verbatim())
}

fn fortune(_inv: &Invocation<'_>, _ctx: &Context<'_>, rng: &mut dyn RngCore) -> Formatted {
    let saying = content::FORTUNES.choose(rng).copied().unwrap_or_default();
    Ok(Output::success(format!("🔮 FORTUNE COOKIE 🔮\n\n\"{saying}\"")))
}

fn whoami(_inv: &Invocation<'_>, ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    Ok(Output::success(fill(content::WHOAMI, ctx.identity)))
}

/// A made-up number of minutes; fresh on every call and not tracked anywhere.
fn fake_minutes(rng: &mut dyn RngCore) -> u32 {
    rng.gen_range(1..=100)
}

fn uptime(_inv: &Invocation<'_>, _ctx: &Context<'_>, rng: &mut dyn RngCore) -> Formatted {
    let text = content::UPTIME.replace("{minutes}", &fake_minutes(rng).to_string());
    Ok(Output::success(text))
}

fn ps(_inv: &Invocation<'_>, _ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    Ok(Output::success(content::PROCESSES.join("\n")).verbatim())
}

fn date(_inv: &Invocation<'_>, ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    let now = ctx.now;
    Ok(Output::success(format!(
        "📅 {} ⏰ {}\n🌍 Timezone: UTC{}\n📊 Unix timestamp: {}",
        now.format("%a %b %d %Y"),
        now.format("%-I:%M:%S %p"),
        now.format("%:z"),
        now.timestamp()
    )))
}

fn history(_inv: &Invocation<'_>, ctx: &Context<'_>, _rng: &mut dyn RngCore) -> Formatted {
    let lines = ctx
        .transcript
        .iter()
        .filter_map(|entry| entry.command_line())
        .enumerate()
        .map(|(i, line)| format!("{}: {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(Output::success(format!("📜 COMMAND HISTORY 📜\n\n{lines}")))
}

fn neofetch(_inv: &Invocation<'_>, ctx: &Context<'_>, rng: &mut dyn RngCore) -> Formatted {
    let text = fill(content::NEOFETCH, ctx.identity)
        .replace("{minutes}", &fake_minutes(rng).to_string());
    Ok(Output::success(text).verbatim())
}

fn exit(_inv: &Invocation<'_>, _ctx: &Context<'_>) -> Output {
    Output::success(content::GOODBYE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Identity, Timing};
    use crate::session::Classification;
    use chrono::{Local, TimeZone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(format: crate::command::FormatFn, line: &str, ctx: &Context<'_>) -> Formatted {
        let inv = Invocation::parse(line).unwrap();
        format(&inv, ctx, &mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_projects_listing() {
        let identity = Identity::default();
        let timing = Timing::default();
        let record = PortfolioRecord::sample();
        let ctx = Context::new(&identity, &timing).with_record(Some(&record));

        let out = run(projects, "projects", &ctx).unwrap();
        assert!(out.text.starts_with("🚀 MY AWESOME PROJECTS 🚀\n\n[1] Project One\n"));
        assert!(out.text.contains("\n[3] Project Three\n"));
        assert!(out.text.contains("🛠️  Tech: React, Convex, TailwindCSS"));
    }

    #[test]
    fn test_skills_and_skills_txt_agree() {
        let identity = Identity::default();
        let timing = Timing::default();
        let record = PortfolioRecord::sample();
        let ctx = Context::new(&identity, &timing).with_record(Some(&record));

        let listed = run(skills, "skills", &ctx).unwrap();
        let file = run(cat, "cat skills.txt", &ctx).unwrap();
        assert_eq!(listed, file);
        assert!(listed.text.contains("\n• TypeScript\n• React"));
    }

    #[test]
    fn test_contact_json_is_valid_json() {
        let identity = Identity::default();
        let timing = Timing::default();
        let record = PortfolioRecord::sample();
        let ctx = Context::new(&identity, &timing).with_record(Some(&record));

        let out = run(cat, "cat contact.json", &ctx).unwrap();
        let (_, json) = out.text.split_once("\n\n").unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["email"], "akshay@example.com");
    }

    #[test]
    fn test_operand_errors() {
        let identity = Identity::default();
        let timing = Timing::default();
        let ctx = Context::new(&identity, &timing);

        assert_eq!(
            run(cp, "cp only_one", &ctx),
            Err(Fault::missing("cp", "missing file operand"))
        );
        assert_eq!(
            run(mv, "mv", &ctx),
            Err(Fault::missing("mv", "missing file operand"))
        );
        assert_eq!(
            run(cat, "cat", &ctx),
            Err(Fault::missing("cat", "missing file operand"))
        );
        assert_eq!(
            run(grep, "grep", &ctx),
            Err(Fault::missing("grep", "missing pattern"))
        );
        assert_eq!(
            run(grep, "grep needle", &ctx),
            Err(Fault::missing("grep", "missing file operand"))
        );
        assert_eq!(
            run(man, "man", &ctx),
            Err(Fault::missing("man", "missing command"))
        );
    }

    #[test]
    fn test_simulated_file_commands_accept_any_operands() {
        let identity = Identity::default();
        let timing = Timing::default();
        let ctx = Context::new(&identity, &timing);

        let copied = run(cp, "cp a.txt /nowhere/b.txt", &ctx).unwrap();
        assert_eq!(copied.text, "✅ cp: copied 'a.txt' to '/nowhere/b.txt' 📋");
        let moved = run(mv, "mv x y", &ctx).unwrap();
        assert_eq!(moved.text, "✅ mv: moved 'x' to 'y' 🚚");
        let found = run(grep, "grep rust nowhere.txt", &ctx).unwrap();
        assert!(found.text.contains("The answer to everything is rust"));
    }

    #[test]
    fn test_man_page_titles_command() {
        let identity = Identity::default();
        let timing = Timing::default();
        let ctx = Context::new(&identity, &timing);

        let page = run(man, "man grep", &ctx).unwrap();
        assert!(page.text.starts_with("📚 MANUAL PAGE FOR GREP 📚"));
        assert!(page.text.contains("    grep - interactive portfolio command"));
        assert!(page.text.contains("Built with ❤️ by Akshay"));
    }

    #[test]
    fn test_cowsay_sizes_bubble_to_message() {
        let identity = Identity::default();
        let timing = Timing::default();
        let ctx = Context::new(&identity, &timing);

        let default = run(cowsay, "cowsay", &ctx).unwrap();
        assert!(default.verbatim);
        assert!(default.text.contains("< Hello from the CLI! >"));

        let said = run(cowsay, "cowsay Hi  There", &ctx).unwrap();
        assert!(said.text.starts_with("\n __________\n< Hi There >\n ----------\n"));
        assert!(said.text.contains("(oo)"));
    }

    #[test]
    fn test_uptime_is_between_one_and_a_hundred() {
        let identity = Identity::default();
        let timing = Timing::default();
        let ctx = Context::new(&identity, &timing);
        let inv = Invocation::parse("uptime").unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let out = uptime(&inv, &ctx, &mut rng).unwrap();
            let minutes: u32 = out
                .text
                .split("running for: ")
                .nth(1)
                .and_then(|rest| rest.split(' ').next())
                .and_then(|n| n.parse().ok())
                .unwrap();
            assert!((1..=100).contains(&minutes));
        }
    }

    #[test]
    fn test_date_formats_fixed_instant() {
        let identity = Identity::default();
        let timing = Timing::default();
        let mut ctx = Context::new(&identity, &timing);
        ctx.now = Local.timestamp_opt(1_700_000_000, 0).unwrap();

        let out = run(date, "date", &ctx).unwrap();
        assert!(out.text.contains("📊 Unix timestamp: 1700000000"));
        assert!(out.text.contains("🌍 Timezone: UTC"));
        assert_eq!(out.classification, Classification::Success);
    }

    #[test]
    fn test_identity_flows_into_texts() {
        let identity = Identity {
            owner: "Grace".to_string(),
            user: "grace".to_string(),
            host: "lab".to_string(),
        };
        let timing = Timing::default();
        let ctx = Context::new(&identity, &timing);

        assert!(run(help, "help", &ctx).unwrap().text.starts_with("🚀 Grace's Interactive Terminal"));
        assert!(run(ls, "ls -l", &ctx).unwrap().text.contains("grace grace"));
        assert!(run(neofetch, "neofetch", &ctx).unwrap().text.contains("grace@lab"));
        assert_eq!(
            run(pwd, "pwd", &ctx).unwrap().text,
            "📍 Current location: /home/grace"
        );
    }
}
