//! French override table.
//!
//! Partial: covers the conditions end users hit most often. Everything else
//! reads through to the English base wording.

use crate::catalog::MessageEntry;
use crate::definitions::*;

/// French message templates.
pub static MESSAGES: &[MessageEntry] = &[
    (&GENERAL_ERROR, "Erreur générale : {0}"),
    (&CONNECTION_CLOSED, "La connexion est fermée."),
    (&INVALID_CREDENTIALS, "Spécification d'autorisation invalide pour l'utilisateur {0}."),
    (&ACCESS_DENIED, "L'utilisateur ne dispose pas du privilège {0} sur l'objet {1}."),
    (&SYNTAX_ERROR, "Erreur de syntaxe à ou près de {0}."),
    (&TABLE_NOT_FOUND, "Table introuvable : {0}"),
    (&COLUMN_NOT_FOUND, "Colonne introuvable : {0}"),
    (&UNIQUE_VIOLATION, "Contrainte d'unicité {0} violée : valeur dupliquée {1}."),
    (&PARAM_IDX_OUT_RANGE, "L'index de paramètre {0} est hors limites. La valeur doit être comprise entre 1 et {1}."),
    (&PARAM_COUNT_MISMATCH, "L'instruction attend {0} paramètres, {1} ont été fournis."),
    (&STATEMENT_TIMEOUT, "Instruction annulée après {0} ms."),
];
