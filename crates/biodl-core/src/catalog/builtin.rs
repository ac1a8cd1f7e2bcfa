//! Known ontology and annotation files, keyed by destination filename.

/// (name, source URL) pairs for the datasets biodl knows about. The name is
/// also the filename the download is saved under.
pub(super) const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    ("go.json", "http://purl.obolibrary.org/obo/go.json"),
    ("go.obo", "http://purl.obolibrary.org/obo/go.obo"),
    ("mim2gene_medgen", "ftp://ftp.ncbi.nlm.nih.gov/gene/DATA/mim2gene_medgen"),
    ("prosite.dat", "ftp://ftp.expasy.org/databases/prosite/prosite.dat"),
    ("hgnc_complete_set.txt", "ftp://ftp.ebi.ac.uk/pub/databases/genenames/hgnc/tsv/hgnc_complete_set.txt"),
    ("goa_human.gaf", "http://geneontology.org/gene-associations/goa_human.gaf"),
    ("goa_human.gaf.gz", "http://geneontology.org/gene-associations/goa_human.gaf.gz"),
    ("mondo.json", "http://purl.obolibrary.org/mondo/mondo.json"),
    ("mondo.owl", "http://purl.obolibrary.org/mondo/mondo.owl"),
    ("ecto.json", "https://raw.githubusercontent.com/EnvironmentOntology/environmental-exposure-ontology/master/ecto.json"),
    ("ecto.owl", "https://raw.githubusercontent.com/EnvironmentOntology/environmental-exposure-ontology/master/ecto.owl"),
    ("maxo.json", "https://raw.githubusercontent.com/monarch-initiative/MAxO/master/maxo.json"),
    ("maxo.owl", "https://raw.githubusercontent.com/monarch-initiative/MAxO/master/maxo.owl"),
    ("maxo.obo", "https://raw.githubusercontent.com/monarch-initiative/MAxO/master/maxo.obo"),
    ("hp.json", "https://raw.githubusercontent.com/obophenotype/human-phenotype-ontology/master/hp.json"),
    ("hp.obo", "https://raw.githubusercontent.com/obophenotype/human-phenotype-ontology/master/hp.obo"),
    ("phenotype.hpoa", "http://purl.obolibrary.org/obo/hp/hpoa/phenotype.hpoa"),
    ("Homo_sapiens_gene_info.gz", "ftp://ftp.ncbi.nih.gov/gene/DATA/GENE_INFO/Mammalia/Homo_sapiens.gene_info.gz"),
];
