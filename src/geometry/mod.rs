pub(crate) mod mask;
