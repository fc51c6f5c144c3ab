//! Reply texts sent back to the chat.

use reparti_database::Member;

use crate::commands::CommandKind;

/// Sent when a non-administrator runs an administrative command.
pub const ADMIN_ONLY: &str = "Questo comando può essere usato solo dagli admin del gruppo.";

/// Sent when the administrator list of the chat cannot be fetched.
pub const CANNOT_VERIFY_PERMISSIONS: &str =
    "Non riesco a verificare i tuoi permessi. Assicurati che io sia admin nel gruppo.";

/// Generic failure reply for store errors.
pub const GENERIC_ERROR: &str = "Si è verificato un errore.";

/// Shown for members stored without a display name.
pub const UNNAMED_MEMBER: &str = "<senza nome>";

/// Usage hint for a command.
pub fn usage(kind: CommandKind) -> String {
    if kind.requires_reply() {
        format!("Uso: Rispondi a un utente con /{} @nome_reparto", kind.name())
    } else {
        format!("Uso: /{} @nome_reparto", kind.name())
    }
}

/// Sent when a reply-only command was not sent as a reply.
pub fn reply_required(kind: CommandKind) -> String {
    let action = match kind {
        CommandKind::RemoveMember => "rimuoverlo",
        _ => "aggiungerlo",
    };
    format!("Devi rispondere al messaggio di un utente per {action}.")
}

/// Sent when a department name lacks the leading tag marker.
pub fn malformed_department() -> String {
    "Formato errato. Il nome del reparto deve iniziare con @ (es: /crea_reparto @aero)".to_string()
}

/// Department created (or already present).
pub fn department_created(name: &str) -> String {
    format!("Reparto {name} creato con successo!")
}

/// Store failure while creating a department.
pub fn department_create_failed(name: &str) -> String {
    format!("Errore: il reparto {name} esiste già o c'è stato un problema.")
}

/// Department missing when adding a member.
pub fn department_not_found(name: &str) -> String {
    format!("Il reparto {name} non esiste. Crealo prima con /crea_reparto {name}")
}

/// Member added (or already present).
pub fn member_added(display_name: &str, department: &str) -> String {
    format!("Utente {display_name} aggiunto a {department}.")
}

/// Member removed.
pub fn member_removed(display_name: &str, department: &str) -> String {
    format!("Utente {display_name} rimosso da {department}.")
}

/// Removal of a user who was not a member.
pub fn not_a_member(display_name: &str, department: &str) -> String {
    format!("L'utente {display_name} non era in {department}.")
}

/// Department without members.
pub fn no_members(department: &str) -> String {
    format!("Nessun membro trovato per il reparto {department}.")
}

/// One line per member, under a header.
pub fn member_list(department: &str, members: &[Member]) -> String {
    let mut text = format!("Membri del reparto {department}:\n");
    for member in members {
        let name = member.display_name().as_deref().unwrap_or(UNNAMED_MEMBER);
        text.push_str(&format!("- {name} (ID: {})\n", member.user_id()));
    }
    text
}
