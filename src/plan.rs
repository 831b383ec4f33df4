//! Declarative extraction plans
//!
//! The worker-detail screen is scraped from a fixed table of
//! `(section, key, locator)` triples plus a short list of grids, built
//! once at startup and iterated generically by the orchestrator. Keys are
//! the application's own French field names; locators follow its control
//! id conventions (`edt` edits, `cmb` combos, `mem` memos, `lbl` computed
//! labels, `grd` grids).

/// One source element and its destination slot in the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Section name the value is grouped under
    pub section: &'static str,
    /// Field name within the section
    pub key: &'static str,
    /// CSS locator resolving to at most one element
    pub locator: &'static str,
}

/// One grid and the snapshot slot its rows land in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    /// Grid name in the snapshot
    pub name: &'static str,
    /// Table element id on the page
    pub grid_id: &'static str,
}

/// The fixed set of fields and grids one run extracts
#[derive(Debug, Clone)]
pub struct ExtractionPlan {
    fields: Vec<FieldSpec>,
    grids: Vec<GridSpec>,
}

/// The worker-detail field table, in on-screen declaration order
const WORKER_FIELDS: &[(&str, &str, &str)] = &[
    // identification
    ("identification", "nom", "#edtNom"),
    ("identification", "prenom", "#edtPrenom"),
    ("identification", "initiales", "#edtInitiales"),
    ("identification", "numeroTravailleur", "#edtNumTravailleur"),
    ("identification", "numeroNational", "#edtNumNational"),
    ("identification", "dateNaissance", "#edtDateNaissance"),
    ("identification", "lieuNaissance", "#edtLieuNaissance"),
    ("identification", "paysNaissance", "#cmbPaysNaissance"),
    ("identification", "nationalite", "#cmbNationalite"),
    ("identification", "sexe", "#cmbSexe"),
    ("identification", "langue", "#cmbLangue"),
    ("identification", "etatCivil", "#cmbEtatCivil"),
    ("identification", "rue", "#edtRue"),
    ("identification", "numero", "#edtNumero"),
    ("identification", "boite", "#edtBoite"),
    ("identification", "codePostal", "#edtCodePostal"),
    ("identification", "localite", "#edtLocalite"),
    ("identification", "pays", "#cmbPays"),
    ("identification", "telephone", "#edtTelephone"),
    ("identification", "gsm", "#edtGsm"),
    ("identification", "email", "#edtEmail"),
    // contrat
    ("contrat", "dateEntree", "#edtDateEntree"),
    ("contrat", "dateSortie", "#edtDateSortie"),
    ("contrat", "motifSortie", "#cmbMotifSortie"),
    ("contrat", "anciennete", "#lblAnciennete"),
    ("contrat", "typeContrat", "#cmbTypeContrat"),
    ("contrat", "dureeContrat", "#cmbDureeContrat"),
    ("contrat", "dateFinContrat", "#edtDateFinContrat"),
    ("contrat", "statut", "#cmbStatut"),
    ("contrat", "fonction", "#edtFonction"),
    ("contrat", "codeFonction", "#edtCodeFonction"),
    ("contrat", "departement", "#cmbDepartement"),
    ("contrat", "centreFrais", "#edtCentreFrais"),
    ("contrat", "categorie", "#cmbCategorie"),
    ("contrat", "horaire", "#cmbHoraire"),
    ("contrat", "heuresSemaine", "#edtHeuresSemaine"),
    ("contrat", "joursSemaine", "#edtJoursSemaine"),
    ("contrat", "regime", "#cmbRegime"),
    ("contrat", "typeRemuneration", "#cmbTypeRemuneration"),
    ("contrat", "salaireBase", "#edtSalaireBase"),
    ("contrat", "commissionParitaire", "#edtCommissionParitaire"),
    // famille
    ("famille", "etatCivilDepuis", "#edtEtatCivilDepuis"),
    ("famille", "conjointNom", "#edtConjointNom"),
    ("famille", "conjointPrenom", "#edtConjointPrenom"),
    ("famille", "conjointDateNaissance", "#edtConjointDateNaissance"),
    ("famille", "conjointProfession", "#cmbConjointProfession"),
    ("famille", "conjointRevenus", "#cmbConjointRevenus"),
    ("famille", "nombreEnfants", "#edtNombreEnfants"),
    ("famille", "enfantsACharge", "#edtEnfantsACharge"),
    ("famille", "enfantsHandicapes", "#edtEnfantsHandicapes"),
    ("famille", "autresACharge", "#edtAutresACharge"),
    ("famille", "autresHandicapes", "#edtAutresHandicapes"),
    ("famille", "chefMenage", "#cmbChefMenage"),
    // paiement
    ("paiement", "modePaiement", "#cmbModePaiement"),
    ("paiement", "iban", "#edtIban"),
    ("paiement", "bic", "#edtBic"),
    ("paiement", "titulaireCompte", "#edtTitulaireCompte"),
    ("paiement", "banque", "#edtBanque"),
    ("paiement", "devise", "#cmbDevise"),
    ("paiement", "periodicite", "#cmbPeriodicite"),
    ("paiement", "domiciliation", "#edtDomiciliation"),
    ("paiement", "acompte", "#edtAcompte"),
    // fiscal
    ("fiscal", "precompteProfessionnel", "#cmbPrecompte"),
    ("fiscal", "codeBareme", "#edtCodeBareme"),
    ("fiscal", "reductionCharges", "#edtReductionCharges"),
    ("fiscal", "fraisPropres", "#edtFraisPropres"),
    ("fiscal", "avantagesNature", "#edtAvantagesNature"),
    ("fiscal", "chequesRepas", "#cmbChequesRepas"),
    ("fiscal", "valeurChequeRepas", "#edtValeurChequeRepas"),
    ("fiscal", "partPatronale", "#edtPartPatronale"),
    ("fiscal", "partTravailleur", "#edtPartTravailleur"),
    ("fiscal", "ecoCheques", "#cmbEcoCheques"),
    ("fiscal", "assuranceGroupe", "#edtAssuranceGroupe"),
    ("fiscal", "assuranceHospitalisation", "#edtAssuranceHospitalisation"),
    // onss
    ("onss", "categorieOnss", "#edtCategorieOnss"),
    ("onss", "codeTravailleurOnss", "#edtCodeTravailleurOnss"),
    ("onss", "typeOccupation", "#cmbTypeOccupation"),
    ("onss", "pourcentageOccupation", "#edtPourcentageOccupation"),
    ("onss", "numeroDimona", "#edtNumeroDimona"),
    ("onss", "dateDimona", "#edtDateDimona"),
    ("onss", "accidentTravail", "#edtAccidentTravail"),
    ("onss", "vacancesAnnuelles", "#cmbVacancesAnnuelles"),
    ("onss", "joursFeries", "#cmbJoursFeries"),
    ("onss", "reductionGroupeCible", "#edtReductionGroupeCible"),
    // divers
    ("divers", "remarque", "#memRemarque"),
    ("divers", "memo", "#memMemo"),
    ("divers", "dateCreation", "#lblDateCreation"),
    ("divers", "dateModification", "#lblDateModification"),
    ("divers", "modifiePar", "#lblModifiePar"),
    ("divers", "actif", "#cmbActif"),
    ("divers", "matriculeInterne", "#edtMatriculeInterne"),
];

/// The worker-detail grids
const WORKER_GRIDS: &[(&str, &str)] = &[
    ("historiqueContrats", "grdContrats"),
    ("occupations", "grdOccupations"),
    ("enfants", "grdEnfants"),
];

impl ExtractionPlan {
    /// The canonical full-extraction plan: every field, every grid
    pub fn worker_full() -> Self {
        Self {
            fields: WORKER_FIELDS
                .iter()
                .map(|&(section, key, locator)| FieldSpec {
                    section,
                    key,
                    locator,
                })
                .collect(),
            grids: WORKER_GRIDS
                .iter()
                .map(|&(name, grid_id)| GridSpec { name, grid_id })
                .collect(),
        }
    }

    /// Degenerate configuration: only the worker name, no grids
    pub fn worker_name_only() -> Self {
        Self {
            fields: vec![FieldSpec {
                section: "identification",
                key: "nom",
                locator: "#edtNom",
            }],
            grids: Vec::new(),
        }
    }

    /// Field specs in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Grid specs in declaration order
    pub fn grids(&self) -> &[GridSpec] {
        &self.grids
    }

    /// Number of field specs
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of grid specs
    pub fn grid_count(&self) -> usize {
        self.grids.len()
    }
}
